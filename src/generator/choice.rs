use crate::content::ContentItem;
use crate::random::{sample, shuffle, RandomSource};

/// Wrong answers offered next to the correct one.
pub const DISTRACTORS: usize = 3;

pub fn pick<'a, T>(rng: &mut dyn RandomSource, pool: &[&'a T]) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.index(pool.len())])
}

/// Builds the option list for `target`, drawing distractors from `pool`.
///
/// Distractors exclude the target item and any value already offered, so every
/// option is distinct. A pool with fewer than `DISTRACTORS` other values yields
/// a shorter list rather than padding. Options are shuffled once and the
/// correct index is located afterwards.
pub fn build_options<T, F>(
    rng: &mut dyn RandomSource,
    target: &T,
    pool: &[&T],
    attribute: F,
) -> (Vec<String>, usize)
where
    T: ContentItem,
    F: Fn(&T) -> &str,
{
    let correct = attribute(target);
    let mut offered = vec![correct];
    let mut candidates = Vec::new();
    for item in pool {
        if item.key() == target.key() {
            continue;
        }
        let value = attribute(item);
        if offered.contains(&value) {
            continue;
        }
        offered.push(value);
        candidates.push(value);
    }

    let mut options: Vec<String> = std::iter::once(correct)
        .chain(sample(rng, candidates, DISTRACTORS))
        .map(str::to_string)
        .collect();
    shuffle(rng, &mut options);

    let correct_index = options
        .iter()
        .position(|option| option == correct)
        .unwrap_or_default();
    (options, correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Kana, KanaGroup, Script};
    use crate::random::{SequenceRandom, StdRandom};

    fn kana(char: &str, romaji: &str) -> Kana {
        Kana {
            char: char.to_string(),
            romaji: romaji.to_string(),
            script: Script::Hiragana,
            group: KanaGroup::Gojuon,
        }
    }

    #[test]
    fn test_four_distinct_options() {
        let items = vec![
            kana("あ", "a"),
            kana("い", "i"),
            kana("う", "u"),
            kana("え", "e"),
            kana("お", "o"),
        ];
        let pool: Vec<&Kana> = items.iter().collect();
        let mut rng = StdRandom::seeded(3);
        for target in &items {
            let (options, correct) = build_options(&mut rng, target, &pool, |k| k.romaji.as_str());
            assert_eq!(options.len(), 4);
            assert_eq!(options[correct], target.romaji);
            let mut sorted = options.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 4);
        }
    }

    #[test]
    fn test_duplicate_values_are_not_offered_twice() {
        // じ and ぢ share a reading; it must appear once at most.
        let items = vec![
            kana("じ", "ji"),
            kana("ぢ", "ji"),
            kana("ず", "zu"),
            kana("づ", "zu"),
            kana("だ", "da"),
        ];
        let pool: Vec<&Kana> = items.iter().collect();
        let mut rng = SequenceRandom::new(vec![0, 1, 2, 3]);
        let (options, correct) = build_options(&mut rng, &items[0], &pool, |k| k.romaji.as_str());
        assert_eq!(options.len(), 3);
        assert_eq!(options[correct], "ji");
        assert_eq!(options.iter().filter(|o| *o == "ji").count(), 1);
    }

    #[test]
    fn test_small_pool_degrades() {
        let items = vec![kana("ん", "n"), kana("を", "wo")];
        let pool: Vec<&Kana> = items.iter().collect();
        let mut rng = SequenceRandom::new(vec![0]);
        let (options, correct) = build_options(&mut rng, &items[0], &pool, |k| k.romaji.as_str());
        assert_eq!(options.len(), 2);
        assert_eq!(options[correct], "n");

        let single = vec![&items[0]];
        let (options, correct) = build_options(&mut rng, &items[0], &single, |k| k.romaji.as_str());
        assert_eq!(options, vec!["n".to_string()]);
        assert_eq!(correct, 0);
    }

    #[test]
    fn test_pick_empty_pool() {
        let mut rng = SequenceRandom::new(vec![0]);
        let pool: Vec<&Kana> = Vec::new();
        assert!(pick(&mut rng, &pool).is_none());
    }
}
