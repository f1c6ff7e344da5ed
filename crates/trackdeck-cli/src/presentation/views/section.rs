use crate::presentation::formatters::USE_COLOR;
use crate::presentation::formatters::highlight::paint_segments;
use crate::presentation::formatters::status::paint_status;
use crate::presentation::view_models::{
    GoalRowViewModel, JobRowViewModel, PaginationViewModel, RecordRowViewModel, SearchViewModel,
    SectionBody, SectionViewModel,
};
use owo_colors::OwoColorize;
use std::fmt;
use trackdeck_engine::PageToken;

pub struct SectionView<'a> {
    vm: &'a SectionViewModel,
}

impl<'a> SectionView<'a> {
    pub fn new(vm: &'a SectionViewModel) -> Self {
        Self { vm }
    }
}

fn token_strip(pagination: &PaginationViewModel) -> String {
    pagination
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == pagination.page => format!("[{n}]"),
            PageToken::Page(n) => n.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_pagination(f: &mut fmt::Formatter<'_>, pagination: &PaginationViewModel) -> fmt::Result {
    writeln!(
        f,
        "page {}/{} · {} items · {}/page · {}",
        pagination.page,
        pagination.total_pages,
        pagination.total_items,
        pagination.page_size,
        token_strip(pagination)
    )
}

fn write_record_row(f: &mut fmt::Formatter<'_>, row: &RecordRowViewModel) -> fmt::Result {
    for cell in &row.cells {
        if cell.long {
            writeln!(f, "  {}:", cell.label)?;
            writeln!(f, "    {}", paint_segments(&cell.segments))?;
        } else {
            writeln!(f, "  {}: {}", cell.label, paint_segments(&cell.segments))?;
        }
    }
    Ok(())
}

fn write_job_row(f: &mut fmt::Formatter<'_>, row: &JobRowViewModel) -> fmt::Result {
    let status = paint_status(&paint_segments(&row.status_label), row.tier);
    let saving = if row.saving { " (saving...)" } else { "" };
    writeln!(
        f,
        "• {} — {} [{}] {}{}",
        paint_segments(&row.title),
        paint_segments(&row.company),
        status,
        row.status_date,
        saving
    )?;
    if let Some(notes) = &row.notes {
        writeln!(f, "    notes: {}", paint_segments(notes))?;
    }
    if let Some(link) = &row.link {
        writeln!(f, "    link: {}", link)?;
    }
    Ok(())
}

fn write_goal_row(f: &mut fmt::Formatter<'_>, row: &GoalRowViewModel) -> fmt::Result {
    let check = if row.completed { "x" } else { " " };
    let description = if row.term_hit && *USE_COLOR {
        format!("{}", row.description.black().on_yellow())
    } else {
        row.description.clone()
    };
    let saving = if row.saving { " (saving...)" } else { "" };
    writeln!(f, "[{}] {} ({}){}", check, description, row.target_date, saving)
}

impl fmt::Display for SectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.vm;
        writeln!(f, "== {} ({}) ==", vm.label, vm.total_records)?;
        if let Some(error) = &vm.error {
            writeln!(f, "error: {}", error)?;
        }
        if vm.no_match_notice {
            writeln!(
                f,
                "No records found for \"{}\". Try a different keyword.",
                vm.query
            )?;
        }

        match &vm.body {
            SectionBody::Empty => {
                if !vm.no_match_notice {
                    writeln!(f, "No entries yet.")?;
                }
                return Ok(());
            }
            SectionBody::Jobs {
                show_rejected,
                all_hidden,
                rows,
            } => {
                if !show_rejected {
                    writeln!(f, "(rejected hidden; use --show-rejected to include)")?;
                }
                if *all_hidden {
                    writeln!(f, "No non-rejected jobs.")?;
                }
                if let Some(pagination) = &vm.pagination {
                    write_pagination(f, pagination)?;
                }
                for row in rows {
                    write_job_row(f, row)?;
                }
            }
            SectionBody::Goals(rows) => {
                if let Some(pagination) = &vm.pagination {
                    write_pagination(f, pagination)?;
                }
                for row in rows {
                    write_goal_row(f, row)?;
                }
            }
            SectionBody::Records(rows) => {
                if let Some(pagination) = &vm.pagination {
                    write_pagination(f, pagination)?;
                }
                let mut first = true;
                for row in rows {
                    if !first {
                        writeln!(f)?;
                    }
                    first = false;
                    write_record_row(f, row)?;
                }
            }
        }
        Ok(())
    }
}

pub struct SearchView<'a> {
    vm: &'a SearchViewModel,
}

impl<'a> SearchView<'a> {
    pub fn new(vm: &'a SearchViewModel) -> Self {
        Self { vm }
    }
}

impl fmt::Display for SearchView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.vm;
        if vm.total == 0 {
            writeln!(
                f,
                "No records found for \"{}\". Try a different keyword.",
                vm.query
            )?;
            return Ok(());
        }

        writeln!(f, "{} matches for \"{}\"", vm.total, vm.query)?;
        for group in &vm.groups {
            writeln!(f)?;
            write!(f, "{}", SectionView::new(group))?;
        }
        Ok(())
    }
}
