use streamlens_catalog::{CatalogTitle, RawTitleRow};

fn row(kind: &str, country: &str, year: &str, genres: &str) -> RawTitleRow {
    RawTitleRow {
        show_id: "s1".to_string(),
        kind: kind.to_string(),
        title: "Example".to_string(),
        country: country.to_string(),
        release_year: year.to_string(),
        listed_in: genres.to_string(),
        ..Default::default()
    }
}

#[test]
fn normalizes_multi_valued_fields() {
    let title = CatalogTitle::from_row(row("Movie", "India, USA", "2020", "Drama"));
    assert_eq!(title.countries, vec!["India", "USA"]);
    assert_eq!(title.genres, vec!["Drama"]);
    // Raw columns survive unchanged alongside the derived lists
    assert_eq!(title.country, "India, USA");
    assert_eq!(title.listed_in, "Drama");
}

#[test]
fn zero_year_becomes_absent() {
    let title = CatalogTitle::from_row(row("TV Show", "USA", "0", "Drama, Comedy"));
    assert_eq!(title.release_year, None);
}

#[test]
fn missing_fields_default_to_empty() {
    let title = CatalogTitle::from_row(RawTitleRow::default());
    assert_eq!(title.id, "");
    assert_eq!(title.kind, "");
    assert_eq!(title.title, "");
    assert_eq!(title.date_added, None);
    assert_eq!(title.release_year, None);
    assert!(title.countries.is_empty());
    assert!(title.genres.is_empty());
}

#[test]
fn unparseable_date_becomes_absent() {
    let mut raw = row("Movie", "", "2020", "");
    raw.date_added = "sometime in 2020".to_string();
    let title = CatalogTitle::from_row(raw);
    assert_eq!(title.date_added, None);
}

#[test]
fn kind_checks_ignore_case_and_padding() {
    let movie = CatalogTitle::from_row(row("MOVIE", "", "", ""));
    assert!(movie.is_movie());
    assert!(!movie.is_series());

    let series = CatalogTitle::from_row(row(" tv show ", "", "", ""));
    assert!(series.is_series());
    assert!(series.kind_matches("TV Show"));
    assert!(!series.kind_matches("show"));

    let other = CatalogTitle::from_row(row("Documentary", "", "", ""));
    assert!(!other.is_movie());
    assert!(!other.is_series());
}
