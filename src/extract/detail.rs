use super::patterns::{element_text, first_percentage, selector};
use crate::models::{Assignment, AssignmentCategory, CourseDetail};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static CLASS_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".asmt_link"));
static HEADER_AVERAGE: LazyLock<Selector> = LazyLock::new(|| selector(".headeravg"));
static LAST_UPDATED: LazyLock<Selector> = LazyLock::new(|| selector(".lastupdated"));
static ASSIGNMENT_ROW: LazyLock<Selector> =
    LazyLock::new(|| selector("table.sg-asp-table tbody tr.sg-asp-table-data-row"));
static CATEGORY_TABLES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "#plnMain_rptAssigmnetsByCourse_dgCourseCategories_0",
        r#"table[id*="dgCourseCategories"]"#,
    ]
    .into_iter()
    .map(selector)
    .collect()
});
static DATA_ROW: LazyLock<Selector> =
    LazyLock::new(|| selector("tbody tr.sg-asp-table-data-row"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| selector("b"));

const ASSIGNMENT_CELLS: usize = 11;
const CATEGORY_CELLS: usize = 4;

/// Reads the assignments pop-up for one course section.
pub struct DetailExtractor<'a> {
    document: &'a Html,
}

impl<'a> DetailExtractor<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// `requested_name` stands in for the title when the page has none.
    pub fn course_detail(
        &self,
        requested_name: &str,
        teacher_name: &str,
        marking_period: u32,
    ) -> CourseDetail {
        let title = self.first_text(&CLASS_TITLE);
        CourseDetail {
            class_name: if title.is_empty() {
                requested_name.to_string()
            } else {
                title
            },
            teacher_name: teacher_name.to_string(),
            current_average: first_percentage(&self.all_text(&HEADER_AVERAGE)),
            last_updated_timestamp: self.all_text(&LAST_UPDATED),
            assignments: self.assignments(),
            categories: self.categories(),
            marking_period,
            error: None,
        }
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.document
            .select(&ASSIGNMENT_ROW)
            .filter_map(|row| assignment(&row))
            .collect()
    }

    /// Category rows from the first category table that has any. Bold rows
    /// are the portal's totals and are left out.
    pub fn categories(&self) -> Vec<AssignmentCategory> {
        CATEGORY_TABLES
            .iter()
            .map(|candidate| {
                self.document
                    .select(candidate)
                    .flat_map(|table| table.select(&DATA_ROW).filter_map(|row| category(&row)))
                    .collect::<Vec<_>>()
            })
            .find(|rows| !rows.is_empty())
            .unwrap_or_default()
    }

    fn first_text(&self, selector: &Selector) -> String {
        self.document
            .select(selector)
            .next()
            .map(|element| element_text(&element))
            .unwrap_or_default()
    }

    // Text of every match, the way a jQuery-style `.text()` joins a selection
    fn all_text(&self, selector: &Selector) -> String {
        self.document
            .select(selector)
            .flat_map(|element| element.text())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

fn cell_texts(row: &ElementRef) -> Vec<String> {
    row.select(&CELL).map(|cell| element_text(&cell)).collect()
}

fn assignment(row: &ElementRef) -> Option<Assignment> {
    let cells: Vec<ElementRef> = row.select(&CELL).collect();
    if cells.len() < ASSIGNMENT_CELLS {
        return None;
    }

    let text = |index: usize| element_text(&cells[index]);
    let linked_name = cells[3]
        .select(&LINK)
        .next()
        .map(|link| element_text(&link))
        .unwrap_or_default();

    Some(Assignment {
        date_due: text(0),
        date_assigned: text(1),
        turned_in_date: text(2),
        name: if linked_name.is_empty() {
            text(3)
        } else {
            linked_name
        },
        category: text(4),
        score: text(5),
        weight: text(6),
        weighted_score: text(7),
        total_points: text(8),
        weighted_total_points: text(9),
        percentage: text(10),
    })
}

fn category(row: &ElementRef) -> Option<AssignmentCategory> {
    if row.select(&BOLD).next().is_some() {
        return None;
    }
    let mut cells = cell_texts(row).into_iter();
    if cells.len() < CATEGORY_CELLS {
        return None;
    }

    Some(AssignmentCategory {
        name: cells.next().unwrap_or_default(),
        earned_points: cells.next().unwrap_or_default(),
        max_points: cells.next().unwrap_or_default(),
        percentage: cells.next().unwrap_or_default(),
    })
}
