use super::*;

fn filtered(search: &str) -> ListQuery {
    ListQuery {
        search: search.to_owned(),
        ..ListQuery::default()
    }
}

#[test]
fn empty_copy_is_none_when_rows_are_shown() {
    assert_eq!(empty_copy(3, 2, &filtered("rust")), None);
}

#[test]
fn empty_copy_reports_empty_collection() {
    assert_eq!(empty_copy(0, 0, &ListQuery::default()), Some(EmptyCopy::NoArticles));
    assert_eq!(empty_copy(0, 0, &filtered("rust")), Some(EmptyCopy::NoArticles));
}

#[test]
fn empty_copy_reports_filters_hiding_everything() {
    assert_eq!(empty_copy(4, 0, &filtered("zzz")), Some(EmptyCopy::NoMatches));

    let by_status = ListQuery {
        status: StatusFilter::Only(ArticleStatus::Review),
        ..ListQuery::default()
    };
    assert_eq!(empty_copy(4, 0, &by_status), Some(EmptyCopy::NoMatches));
}

#[test]
fn empty_copy_titles_differ() {
    assert_ne!(EmptyCopy::NoArticles.title(), EmptyCopy::NoMatches.title());
}

#[test]
fn result_summary_counts_all_or_subset() {
    assert_eq!(result_summary(1, 1), "1 article");
    assert_eq!(result_summary(5, 5), "5 articles");
    assert_eq!(result_summary(5, 2), "Showing 2 of 5");
}
