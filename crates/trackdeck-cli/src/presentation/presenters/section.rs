use crate::presentation::formatters::text::single_line;
use crate::presentation::presenters::present_summary;
use crate::presentation::view_models::{
    CellViewModel, GoalRowViewModel, JobRowViewModel, PaginationViewModel, RecordRowViewModel,
    ScreenBody, ScreenViewModel, SearchViewModel, SectionBody, SectionViewModel, TabViewModel,
};
use trackdeck_engine::{
    RenderSet, Section, Segment, StatusTier, build_pagination, classify_status, filter_section,
    format_cell, highlight, is_long_field, paginate, render_set, section_label, term_matches,
    visible_jobs,
};
use trackdeck_runtime::DashboardController;
use trackdeck_types::{GoalCadence, Record, SectionKey};

pub fn present_tabs(set: &RenderSet<'_>) -> Vec<TabViewModel> {
    let mut tabs = Vec::with_capacity(set.sections.len() + 1);
    if let Some(search) = &set.search {
        tabs.push(TabViewModel {
            key: SectionKey::Search,
            label: section_label(SectionKey::Search),
            count: search.total,
        });
    }
    tabs.extend(set.sections.iter().map(|section| TabViewModel {
        key: section.key,
        label: section.label,
        count: section.items.len(),
    }));
    tabs
}

pub fn present_section(
    controller: &DashboardController,
    section: &Section<'_>,
) -> SectionViewModel {
    let filtered = filter_section(section, controller.query());
    present_items(controller, section, filtered)
}

/// Build one section view over an already text-filtered record list.
/// Applies the jobs derived filter, paginates against the stored page
/// state, and reports the clamped page for store self-correction.
fn present_items(
    controller: &DashboardController,
    section: &Section<'_>,
    filtered: Vec<&Record>,
) -> SectionViewModel {
    let query = controller.query().to_string();
    let no_match_notice = !query.is_empty() && !section.items.is_empty() && filtered.is_empty();

    let display: Vec<&Record> = if section.key == SectionKey::Jobs {
        visible_jobs(&filtered, controller.show_rejected())
    } else {
        filtered.clone()
    };

    let state = controller.page_state(section.key);
    let slice = paginate(&display, state.page, state.page_size);
    let effective_page = slice.page;
    let pagination = (!display.is_empty()).then(|| PaginationViewModel {
        total_items: display.len(),
        page: slice.page,
        total_pages: slice.total_pages,
        page_size: state.page_size,
        tokens: build_pagination(slice.total_pages, slice.page),
    });

    let body = if filtered.is_empty() {
        SectionBody::Empty
    } else if section.key == SectionKey::Jobs {
        SectionBody::Jobs {
            show_rejected: controller.show_rejected(),
            all_hidden: display.is_empty(),
            rows: slice
                .visible
                .iter()
                .map(|record| job_row(controller, record, &query))
                .collect(),
        }
    } else if let Some(cadence) = section.goal_cadence {
        SectionBody::Goals(
            slice
                .visible
                .iter()
                .map(|record| goal_row(controller, cadence, record, &query))
                .collect(),
        )
    } else {
        SectionBody::Records(
            slice
                .visible
                .iter()
                .map(|record| record_row(section, record, &query))
                .collect(),
        )
    };

    SectionViewModel {
        key: section.key,
        label: section.label,
        total_records: section.items.len(),
        query,
        no_match_notice,
        error: controller.list_error(section.key).map(str::to_string),
        pagination,
        effective_page,
        body,
    }
}

fn cell_segments(value: &str, query: &str) -> Vec<Segment> {
    if value.is_empty() {
        return vec![Segment {
            text: "-".to_string(),
            matched: false,
        }];
    }
    highlight(value, query)
}

fn record_row(section: &Section<'_>, record: &Record, query: &str) -> RecordRowViewModel {
    let cells = section
        .columns
        .iter()
        .map(|column| {
            let value = format_cell(record.get(column.key));
            CellViewModel {
                label: column.label,
                segments: cell_segments(&value, query),
                long: is_long_field(column.key),
            }
        })
        .collect();
    RecordRowViewModel { cells }
}

fn job_row(controller: &DashboardController, record: &Record, query: &str) -> JobRowViewModel {
    let status = record.text("status").unwrap_or("");
    let tier = classify_status(status);
    let rejected = tier == StatusTier::Rejected;

    let title = record.text("job_title").unwrap_or("Untitled");
    let company = record.text("company").unwrap_or("-");
    let applied = format_cell(record.get("applied_date"));
    let result = format_cell(record.get("result_date"));
    // Notes are a one-line preview in the jobs list; the full text lives in
    // the generic record view.
    let notes = single_line(&format_cell(record.get("notes")), 120);

    let status_label = if rejected {
        "Rejected".to_string()
    } else if status.is_empty() {
        "Applied".to_string()
    } else {
        status.to_string()
    };
    let status_date = if rejected { result } else { applied };
    let status_date = if status_date.is_empty() {
        "-".to_string()
    } else {
        status_date
    };

    let id = record.id();
    JobRowViewModel {
        saving: id
            .as_ref()
            .is_some_and(|id| controller.is_saving(SectionKey::Jobs, id)),
        can_reject: !status.eq_ignore_ascii_case("rejected"),
        title: highlight(title, query),
        link: record
            .text("job_link")
            .filter(|link| !link.is_empty())
            .map(str::to_string),
        company: highlight(company, query),
        notes: (!notes.is_empty()).then(|| highlight(&notes, query)),
        status_label: highlight(&status_label, query),
        tier,
        status_date,
        id,
    }
}

fn goal_row(
    controller: &DashboardController,
    cadence: GoalCadence,
    record: &Record,
    query: &str,
) -> GoalRowViewModel {
    let draft = controller.goal_draft_for(cadence, record);
    let id = record.id();
    let target_date = match record.text("target_date") {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => "No date".to_string(),
    };
    GoalRowViewModel {
        saving: id
            .as_ref()
            .is_some_and(|id| controller.is_saving(cadence.section_key(), id)),
        term_hit: term_matches(&draft.description, query),
        id,
        cadence,
        target_date,
        description: draft.description,
        completed: draft.completed,
    }
}

pub fn present_search(
    controller: &DashboardController,
    set: &RenderSet<'_>,
) -> Option<SearchViewModel> {
    let search = set.search.as_ref()?;
    Some(SearchViewModel {
        query: controller.query().to_string(),
        total: search.total,
        groups: search
            .groups
            .iter()
            .map(|group| present_items(controller, &group.section, group.matches.clone()))
            .collect(),
    })
}

/// Build the complete screen: tab bar, stat row, and the active section's
/// body (or the grouped search results).
pub fn present_screen(controller: &DashboardController) -> ScreenViewModel {
    let fetch_error = controller.fetch_error().map(str::to_string);
    let Some(snapshot) = controller.snapshot() else {
        return ScreenViewModel {
            tabs: Vec::new(),
            active: controller.active_section(),
            stats: Vec::new(),
            fetch_error,
            body: ScreenBody::Loading,
        };
    };

    let set = render_set(snapshot, controller.query());
    let tabs = present_tabs(&set);
    let active = set.resolve_active(controller.active_section());
    let stats = present_summary(snapshot);

    let body = if active == SectionKey::Search {
        match present_search(controller, &set) {
            Some(vm) => ScreenBody::Search(vm),
            None => ScreenBody::Loading,
        }
    } else {
        match set.section(active) {
            Some(section) => ScreenBody::Section(present_section(controller, section)),
            None => ScreenBody::Loading,
        }
    };

    ScreenViewModel {
        tabs,
        active,
        stats,
        fetch_error,
        body,
    }
}

/// Stored-page corrections implied by a built screen; applied by the
/// caller right after presenting so stuck pages self-correct.
pub fn page_syncs(screen: &ScreenViewModel) -> Vec<(SectionKey, usize)> {
    match &screen.body {
        ScreenBody::Section(vm) => vec![(vm.key, vm.effective_page)],
        ScreenBody::Search(vm) => vm
            .groups
            .iter()
            .map(|group| (group.key, group.effective_page))
            .collect(),
        ScreenBody::Loading => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trackdeck_runtime::LocalClient;
    use trackdeck_testing::{job_batch_snapshot, sample_snapshot};

    async fn controller_over(
        snapshot: trackdeck_types::Snapshot,
    ) -> DashboardController {
        let client = Arc::new(LocalClient::new(snapshot));
        let mut controller = DashboardController::new(client);
        controller.refresh().await;
        controller
    }

    #[tokio::test]
    async fn rejected_jobs_hidden_until_toggled() {
        let mut controller = controller_over(sample_snapshot()).await;
        let snapshot = controller.snapshot().unwrap().clone();
        let set = render_set(&snapshot, "");
        let jobs = *set.section(SectionKey::Jobs).unwrap();

        let vm = present_section(&controller, &jobs);
        let SectionBody::Jobs { rows, .. } = &vm.body else {
            panic!("expected jobs body");
        };
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.tier != StatusTier::Rejected));
        assert_eq!(vm.pagination.as_ref().unwrap().total_items, 3);

        controller.toggle_show_rejected();
        let vm = present_section(&controller, &jobs);
        let SectionBody::Jobs { rows, .. } = &vm.body else {
            panic!("expected jobs body");
        };
        // Re-included in original position, others unmoved.
        let titles: Vec<String> = rows
            .iter()
            .map(|row| row.title.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Backend Engineer",
                "Platform Engineer",
                "Site Reliability Engineer",
                "Staff Engineer"
            ]
        );
    }

    #[tokio::test]
    async fn out_of_range_page_reports_clamped_value() {
        let mut controller = controller_over(job_batch_snapshot(23)).await;
        controller.set_page(SectionKey::Jobs, 5);

        let snapshot = controller.snapshot().unwrap().clone();
        let set = render_set(&snapshot, "");
        let vm = present_section(&controller, set.section(SectionKey::Jobs).unwrap());

        let pagination = vm.pagination.as_ref().unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.page, 3);
        assert_eq!(vm.effective_page, 3);
        let SectionBody::Jobs { rows, .. } = &vm.body else {
            panic!("expected jobs body");
        };
        assert_eq!(rows.len(), 3);

        // The caller feeds the clamp back into the store.
        controller.sync_page(SectionKey::Jobs, vm.effective_page);
        assert_eq!(controller.page_state(SectionKey::Jobs).page, 3);
    }

    #[tokio::test]
    async fn search_screen_groups_only_matching_sections() {
        let mut controller = controller_over(sample_snapshot()).await;
        controller.commit_search("platform");

        let screen = present_screen(&controller);
        assert_eq!(screen.active, SectionKey::Search);
        assert_eq!(screen.tabs[0].key, SectionKey::Search);
        assert_eq!(screen.tabs[0].count, 1);

        let ScreenBody::Search(search) = &screen.body else {
            panic!("expected search body");
        };
        assert_eq!(search.groups.len(), 1);
        assert_eq!(search.groups[0].key, SectionKey::Jobs);
        assert_eq!(search.groups[0].pagination.as_ref().unwrap().total_items, 1);
    }

    #[tokio::test]
    async fn missing_fields_render_as_dash_cells() {
        let controller = controller_over(sample_snapshot()).await;
        let snapshot = controller.snapshot().unwrap().clone();
        let set = render_set(&snapshot, "");
        let vm = present_section(&controller, set.section(SectionKey::Coding).unwrap());

        let SectionBody::Records(rows) = &vm.body else {
            panic!("expected record body");
        };
        // Second problem has no problem_link; its Link cell degrades to "-".
        let link_cell = rows[1]
            .cells
            .iter()
            .find(|cell| cell.label == "Link")
            .unwrap();
        assert_eq!(link_cell.segments[0].text, "-");
    }
}
