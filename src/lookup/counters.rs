use tracing::debug;

use super::LookupError;
use crate::models::{parse_rate, CounterResult, HeroRecord};

/// Find every hero that counters `target`, best win rate first.
///
/// `target` must already be trimmed and non-empty. A target that exists but
/// that nobody counters yields an empty list, not an error.
///
/// The existence check looks at names only, so a record too incomplete to
/// appear as a counter can still be searched for.
pub fn resolve_counters(
    heroes: &[HeroRecord],
    target: &str,
) -> Result<Vec<CounterResult>, LookupError> {
    let lowered = target.to_lowercase();

    if !heroes.iter().any(|hero| hero.name_matches(&lowered)) {
        return Err(LookupError::TargetNotFound(target.to_string()));
    }

    let mut ranked: Vec<(f64, CounterResult)> = heroes
        .iter()
        .filter(|hero| hero.counters(&lowered))
        .filter_map(HeroRecord::counter_result)
        .map(|result| (parse_rate(Some(&result.win_rate)), result))
        .collect();

    // Stable, so equal rates keep dataset order.
    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    debug!("Found {} counters for {:?}", ranked.len(), target);
    Ok(ranked.into_iter().map(|(_, result)| result).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn heroes(values: Vec<Value>) -> Vec<HeroRecord> {
        values.into_iter().map(HeroRecord::from_json).collect()
    }

    fn counter(name: &str, hero_type: &str, win_rate: &str, image: &str) -> CounterResult {
        CounterResult {
            name: name.to_string(),
            hero_type: hero_type.to_string(),
            win_rate: win_rate.to_string(),
            image: image.to_string(),
        }
    }

    fn two_hero_dataset() -> Vec<HeroRecord> {
        heroes(vec![
            json!({ "name": "A", "type": "t", "win_rate": "80%", "image": "a.png", "countered_heroes": ["B"] }),
            json!({ "name": "B", "type": "t2", "win_rate": "N/A", "image": "b.png", "countered_heroes": [] }),
        ])
    }

    #[test]
    fn test_resolve_end_to_end() {
        let data = two_hero_dataset();
        assert_eq!(
            resolve_counters(&data, "B").unwrap(),
            vec![counter("A", "t", "80%", "a.png")]
        );
    }

    #[test]
    fn test_resolve_target_not_found() {
        let data = two_hero_dataset();
        let err = resolve_counters(&data, "Z").unwrap_err();
        assert!(matches!(err, LookupError::TargetNotFound(ref name) if name == "Z"));
    }

    #[test]
    fn test_resolve_not_found_on_empty_dataset() {
        assert!(matches!(
            resolve_counters(&[], "A"),
            Err(LookupError::TargetNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_existing_without_counters() {
        let data = two_hero_dataset();
        assert!(resolve_counters(&data, "A").unwrap().is_empty());
    }

    #[test]
    fn test_resolve_sorted_by_rate_descending() {
        let data = heroes(vec![
            json!({ "name": "Target", "image": "t.png" }),
            json!({ "name": "Low", "type": "t", "win_rate": "10%", "image": "l.png", "countered_heroes": ["Target"] }),
            json!({ "name": "High", "type": "t", "win_rate": "90%", "image": "h.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Mid", "type": "t", "win_rate": "50%", "image": "m.png", "countered_heroes": ["Target"] }),
        ]);

        let rates: Vec<String> = resolve_counters(&data, "Target")
            .unwrap()
            .into_iter()
            .map(|c| c.win_rate)
            .collect();
        assert_eq!(rates, vec!["90%", "50%", "10%"]);
    }

    #[test]
    fn test_resolve_ties_keep_dataset_order() {
        let data = heroes(vec![
            json!({ "name": "Target" }),
            json!({ "name": "First", "type": "t", "win_rate": "N/A", "image": "1.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Second", "type": "t", "win_rate": "junk", "image": "2.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Best", "type": "t", "win_rate": "1%", "image": "b.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Third", "type": "t", "win_rate": "0%", "image": "3.png", "countered_heroes": ["Target"] }),
        ]);

        let names: Vec<String> = resolve_counters(&data, "Target")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Best", "First", "Second", "Third"]);
    }

    #[test]
    fn test_resolve_negative_zero_ties_with_zero() {
        let data = heroes(vec![
            json!({ "name": "Target" }),
            json!({ "name": "First", "type": "t", "win_rate": "N/A", "image": "1.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Second", "type": "t", "win_rate": "-0%", "image": "2.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Third", "type": "t", "win_rate": "0%", "image": "3.png", "countered_heroes": ["Target"] }),
        ]);

        let names: Vec<String> = resolve_counters(&data, "Target")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let data = heroes(vec![
            json!({ "name": "Abc", "type": "t", "win_rate": "1%", "image": "abc.png" }),
            json!({ "name": "Hunter", "type": "t", "win_rate": "55%", "image": "h.png", "countered_heroes": ["aBC"] }),
        ]);

        let upper = resolve_counters(&data, "ABC").unwrap();
        let lower = resolve_counters(&data, "abc").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, vec![counter("Hunter", "t", "55%", "h.png")]);
    }

    #[test]
    fn test_resolve_skips_incomplete_counters() {
        let data = heroes(vec![
            json!({ "name": "Target" }),
            json!({ "name": "NoImage", "type": "t", "win_rate": "70%", "countered_heroes": ["Target"] }),
            json!({ "name": "NoRate", "type": "t", "image": "n.png", "countered_heroes": ["Target"] }),
            json!({ "name": "Good", "type": "t", "win_rate": "40%", "image": "g.png", "countered_heroes": ["Target"] }),
        ]);

        assert_eq!(
            resolve_counters(&data, "Target").unwrap(),
            vec![counter("Good", "t", "40%", "g.png")]
        );
    }

    #[test]
    fn test_incomplete_target_still_exists() {
        // Only a name: not valid as a counter, but still searchable.
        let data = heroes(vec![json!({ "name": "Bare" })]);
        assert!(resolve_counters(&data, "bare").unwrap().is_empty());
    }

    #[test]
    fn test_self_counter_is_included() {
        let data = heroes(vec![json!({
            "name": "Mirror", "type": "t", "win_rate": "50%", "image": "m.png",
            "countered_heroes": ["mirror"]
        })]);
        assert_eq!(
            resolve_counters(&data, "Mirror").unwrap(),
            vec![counter("Mirror", "t", "50%", "m.png")]
        );
    }
}
