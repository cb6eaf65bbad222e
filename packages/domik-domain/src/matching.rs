/// Case-insensitive containment of the query text within the stored display
/// name. The direction matters: "Петербург" matches "Санкт-Петербург", not
/// the reverse.
pub fn name_contains(name: &str, query: &str) -> bool {
	let query = query.trim();

	if query.is_empty() {
		return false;
	}

	name.to_lowercase().contains(&query.to_lowercase())
}

/// Picks exactly one identifier among candidates whose names contain the
/// query. Several names can contain the same substring ("Moscow" is inside
/// both "Moscow" and "Moscow Oblast"); the tie-break is the shortest
/// matching name, then lexicographic order, so resolution never depends on
/// enumeration order.
pub fn pick_best<'a, I>(query: &str, candidates: I) -> Option<i64>
where
	I: IntoIterator<Item = (i64, &'a str)>,
{
	candidates
		.into_iter()
		.filter(|(_, name)| name_contains(name, query))
		.min_by(|(_, a), (_, b)| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)))
		.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn containment_is_case_insensitive() {
		assert!(name_contains("Санкт-Петербург", "петербург"));
		assert!(name_contains("Moscow Oblast", "moscow"));
	}

	#[test]
	fn containment_is_one_directional() {
		assert!(!name_contains("Петербург", "Санкт-Петербург"));
	}

	#[test]
	fn blank_query_never_matches() {
		assert!(!name_contains("Москва", "  "));
		assert_eq!(pick_best("", [(1, "Москва")]), None);
	}

	#[test]
	fn shortest_matching_name_wins() {
		let candidates = [(1, "Moscow Oblast"), (2, "Moscow")];

		assert_eq!(pick_best("moscow", candidates), Some(2));
	}

	#[test]
	fn lexicographic_tie_break_is_deterministic() {
		let candidates = [(5, "Moscow West"), (3, "Moscow East")];

		assert_eq!(pick_best("moscow", candidates), Some(3));
	}

	#[test]
	fn no_containment_means_no_match() {
		assert_eq!(pick_best("Казань", [(1, "Москва"), (2, "Санкт-Петербург")]), None);
	}
}
