use super::patterns::{
    capture, element_text, first_number, first_text, normalize_whitespace, selector,
    CLASS_ID_RE, COURSE_CODE_RE, PERIOD_RE, SECTION_KEY_RE,
};
use crate::log_debug;
use crate::models::CourseSummary;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static WEEK_VIEW_ROW: LazyLock<Selector> =
    LazyLock::new(|| selector(".sg-homeview-table tbody tr"));
static CLASS_TABLE: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#".sg-asp-table, table.InfoTable, #plnMain_dgClassesMarks, table[class*="Class"]"#)
});
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static CLASS_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.sg-font-larger"));
static GRADE_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector("a.sg-font-larger-average"));
static STAFF_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a#staffName"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));

type Skin = fn(&Html) -> Vec<CourseSummary>;

/// Known listing layouts, newest first. The first one that yields any rows
/// is used for the whole page.
const SKINS: &[(&str, Skin)] = &[
    ("week view", week_view_rows as Skin),
    ("class table", class_table_rows as Skin),
];

/// Where to fetch a course's assignments from, found through its listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLink {
    pub section_key: String,
    pub teacher_name: String,
}

pub struct ListingExtractor<'a> {
    document: &'a Html,
}

impl<'a> ListingExtractor<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Course rows in page order, one per `(class_id, class_name)`.
    pub fn courses(&self) -> Vec<CourseSummary> {
        for (skin, extract) in SKINS {
            let rows = extract(self.document);
            if !rows.is_empty() {
                log_debug!("[extract] {} listing produced {} rows", skin, rows.len());
                return dedup(rows);
            }
        }

        log_debug!("[extract] No listing layout matched");
        Vec::new()
    }

    /// Finds the week-view row named `class_name` (whitespace-insensitive)
    /// whose grade link carries a section key.
    pub fn course_link(&self, class_name: &str) -> Option<CourseLink> {
        let wanted = normalize_whitespace(class_name);
        if wanted.is_empty() {
            return None;
        }

        self.document
            .select(&WEEK_VIEW_ROW)
            .filter_map(|row| {
                let cells: Vec<ElementRef> = row.select(&CELL).collect();
                (cells.len() >= 2).then_some(cells)
            })
            .filter(|cells| {
                let name = normalize_whitespace(&first_text(&cells[0], &CLASS_LINK));
                !name.is_empty() && name == wanted
            })
            .find_map(|cells| {
                let grade_link = cells[1].select(&GRADE_LINK).next()?;
                let target = grade_link.value();
                let section_key = ["href", "onclick"]
                    .into_iter()
                    .filter_map(|attr| target.attr(attr))
                    .find_map(|value| capture(&SECTION_KEY_RE, value));

                if section_key.is_none() {
                    log_debug!("[extract] Row for {:?} has no section key", class_name);
                }

                Some(CourseLink {
                    section_key: section_key?,
                    teacher_name: first_text(&cells[0], &STAFF_LINK),
                })
            })
    }
}

fn dedup(rows: Vec<CourseSummary>) -> Vec<CourseSummary> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert((row.class_id.clone(), row.class_name.clone())))
        .collect()
}

fn week_view_rows(document: &Html) -> Vec<CourseSummary> {
    document
        .select(&WEEK_VIEW_ROW)
        .filter_map(|row| week_view_row(&row))
        .collect()
}

fn week_view_row(row: &ElementRef) -> Option<CourseSummary> {
    let cells: Vec<ElementRef> = row.select(&CELL).collect();
    if cells.len() < 2 {
        return None;
    }

    let first = &cells[0];
    let class_link = first.select(&CLASS_LINK).next()?;
    let class_name = element_text(&class_link);
    if class_name.is_empty() || class_name == "Class" {
        return None;
    }

    let class_id = class_link
        .value()
        .attr("onclick")
        .and_then(|onclick| capture(&CLASS_ID_RE, onclick));

    let span_texts: Vec<String> = first.select(&SPAN).map(|span| element_text(&span)).collect();
    let course_code = span_texts
        .iter()
        .find_map(|text| capture(&COURSE_CODE_RE, text))
        .unwrap_or_default();
    let period = span_texts
        .iter()
        .find_map(|text| capture(&PERIOD_RE, text))
        .unwrap_or_default();

    let staff_link = first.select(&STAFF_LINK).next();
    let teacher_name = staff_link
        .map(|link| element_text(&link))
        .unwrap_or_default();
    let teacher_email = staff_link
        .and_then(|link| link.value().attr("href"))
        .map(|href| href.replace("mailto:", ""))
        .unwrap_or_default();

    let grade_display = first_text(&cells[1], &GRADE_LINK);

    Some(summary(
        class_id,
        class_name,
        course_code,
        teacher_name,
        teacher_email,
        period,
        grade_display,
    ))
}

fn class_table_rows(document: &Html) -> Vec<CourseSummary> {
    document
        .select(&CLASS_TABLE)
        .flat_map(|table| table.select(&ROW).skip(1).filter_map(|row| class_table_row(&row)))
        .collect()
}

fn class_table_row(row: &ElementRef) -> Option<CourseSummary> {
    let cells: Vec<String> = row.select(&CELL).map(|cell| element_text(&cell)).collect();
    if cells.len() < 3 {
        return None;
    }

    let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();
    let class_name = cell(0);
    if class_name.is_empty() || class_name == "Course" {
        return None;
    }

    Some(summary(
        None,
        class_name,
        cell(1),
        cell(3),
        String::new(),
        cell(2),
        cell(4),
    ))
}

fn summary(
    class_id: Option<String>,
    class_name: String,
    course_code: String,
    teacher_name: String,
    teacher_email: String,
    period: String,
    grade_display: String,
) -> CourseSummary {
    let average = first_number(&grade_display);
    CourseSummary {
        class_id,
        class_name,
        course_code,
        teacher_name,
        teacher_email,
        period,
        grade_display,
        average,
        has_grade: average.is_some(),
    }
}
