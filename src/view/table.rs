//! County table view model

use serde::Serialize;

use crate::model::County;

/// Text shown in place of rows when the filter matches nothing
pub const EMPTY_MESSAGE: &str = "No results found.";

/// Does a county match the search term?
///
/// Name and former province compare case-insensitively; the code is a plain
/// substring match. An empty term matches every county.
pub fn matches(county: &County, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    county.name.to_lowercase().contains(&needle)
        || county.code.contains(term)
        || county
            .former_province
            .as_deref()
            .map(|p| p.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

/// Counties matching `term`, in input order
pub fn filter_counties<'a>(counties: &'a [County], term: &str) -> Vec<&'a County> {
    counties.iter().filter(|c| matches(c, term)).collect()
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub province: String,
    pub area: String,
}

impl From<&County> for TableRow {
    fn from(county: &County) -> Self {
        Self {
            id: county.id,
            code: county.code.clone(),
            name: county.name.clone(),
            province: county.province_label().to_string(),
            area: county.area_label(),
        }
    }
}

/// Everything the table needs to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    pub rows: Vec<TableRow>,
    pub total: usize,
}

impl TableModel {
    pub fn build(counties: &[County], term: &str) -> Self {
        Self {
            rows: filter_counties(counties, term)
                .into_iter()
                .map(TableRow::from)
                .collect(),
            total: counties.len(),
        }
    }

    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} counties", self.shown(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coast() -> Vec<County> {
        vec![
            County::new(1, "001", "Mombasa").province("Coast").area(212.5),
            County::new(2, "002", "Kwale").province("Coast"),
        ]
    }

    #[test]
    fn test_search_by_name() {
        let counties = coast();
        let model = TableModel::build(&counties, "mom");

        assert_eq!(model.shown(), 1);
        assert_eq!(model.rows[0].name, "Mombasa");
        assert_eq!(model.summary(), "Showing 1 of 2 counties");
    }

    #[test]
    fn test_search_by_province_and_code() {
        let counties = coast();
        assert_eq!(filter_counties(&counties, "COAST").len(), 2);
        assert_eq!(filter_counties(&counties, "002").len(), 1);
    }

    #[test]
    fn test_code_match_is_case_sensitive() {
        let counties = vec![County::new(30, "BAR", "Baringo")];
        assert_eq!(filter_counties(&counties, "BAR").len(), 1);
        // "bar" still matches, but through the name
        assert_eq!(filter_counties(&counties, "bar").len(), 1);

        let counties = vec![County::new(30, "BRG", "Baringo")];
        assert!(filter_counties(&counties, "brg").is_empty());
    }

    #[test]
    fn test_missing_province_is_skipped() {
        let counties = vec![County::new(47, "047", "Nairobi City")];
        assert!(filter_counties(&counties, "n/a").is_empty());
    }

    #[test]
    fn test_empty_term_and_no_match() {
        let counties = coast();
        assert_eq!(TableModel::build(&counties, "").shown(), 2);

        let model = TableModel::build(&counties, "zzz");
        assert!(model.is_empty());
        assert_eq!(model.summary(), "Showing 0 of 2 counties");
    }

    #[test]
    fn test_row_labels() {
        let counties = coast();
        let model = TableModel::build(&counties, "");
        assert_eq!(model.rows[0].area, "212.5");
        assert_eq!(model.rows[1].area, "-");
        assert_eq!(model.rows[1].province, "Coast");
    }
}
