pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_cities.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_cities.sql")),
				"tables/002_districts.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_districts.sql")),
				"tables/003_metro_stations.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_metro_stations.sql")),
				"tables/004_property_types.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_property_types.sql")),
				"tables/005_transaction_types.sql" =>
					out.push_str(include_str!("../../../sql/tables/005_transaction_types.sql")),
				"tables/006_listings.sql" =>
					out.push_str(include_str!("../../../sql/tables/006_listings.sql")),
				"tables/007_listing_images.sql" =>
					out.push_str(include_str!("../../../sql/tables/007_listing_images.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expands_every_include() {
		let sql = render_schema();

		assert!(!sql.contains("\\ir "));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS cities"));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS listing_images"));
	}
}
