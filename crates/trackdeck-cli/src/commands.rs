use crate::args::{AddCommand, Cli, Commands, GoalCommand};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_search, present_section, present_summary};
use crate::presentation::views::{SearchView, SectionView, SummaryView};
use crate::ui;
use anyhow::{Result, bail};
use trackdeck_engine::render_set;
use trackdeck_runtime::{
    CodingPayload, ContactPayload, DashboardController, JobPayload, Mutation, ProjectPayload,
    parse_tech_stack,
};
use trackdeck_types::{GoalCadence, RecordId, SectionKey};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.api_base, cli.data)?;

    match cli.command {
        None | Some(Commands::Dash) => ui::tui::run(&ctx),
        Some(Commands::Summary) => summary(&ctx),
        Some(Commands::List {
            section,
            search,
            page,
            page_size,
            show_rejected,
        }) => list(&ctx, section, search, page, page_size, show_rejected),
        Some(Commands::Search {
            term,
            show_rejected,
        }) => search_cmd(&ctx, &term, show_rejected),
        Some(Commands::Add { command }) => add(&ctx, command),
        Some(Commands::Goal { command }) => goal(&ctx, command),
    }
}

/// Build a controller and load the first snapshot, failing the command on
/// fetch errors (there is no last-good state to fall back to here).
fn load_controller(ctx: &ExecutionContext) -> Result<DashboardController> {
    let client = ctx.client()?;
    let mut controller = DashboardController::new(client);
    ctx.block_on(controller.refresh());
    if let Some(err) = controller.fetch_error() {
        bail!("failed to fetch snapshot: {err}");
    }
    Ok(controller)
}

fn summary(ctx: &ExecutionContext) -> Result<()> {
    let controller = load_controller(ctx)?;
    let snapshot = controller.snapshot().expect("snapshot fetched");
    let stats = present_summary(snapshot);
    print!("{}", SummaryView::new(&stats));
    Ok(())
}

fn list(
    ctx: &ExecutionContext,
    section: SectionKey,
    search: Option<String>,
    page: usize,
    page_size: usize,
    show_rejected: bool,
) -> Result<()> {
    if section == SectionKey::Search {
        bail!("use `trackdeck search <term>` for the search view");
    }

    let mut controller = load_controller(ctx)?;
    if let Some(term) = &search {
        controller.commit_search(term);
    }
    if show_rejected {
        controller.toggle_show_rejected();
    }
    controller.set_page_size(section, page_size);
    controller.set_page(section, page);

    let (output, effective_page) = {
        let snapshot = controller.snapshot().expect("snapshot fetched");
        let set = render_set(snapshot, controller.query());
        let section_view = set
            .section(section)
            .copied()
            .expect("base sections are always rendered");
        let vm = present_section(&controller, &section_view);
        (format!("{}", SectionView::new(&vm)), vm.effective_page)
    };
    controller.sync_page(section, effective_page);

    print!("{output}");
    Ok(())
}

fn search_cmd(ctx: &ExecutionContext, term: &str, show_rejected: bool) -> Result<()> {
    let mut controller = load_controller(ctx)?;
    if show_rejected {
        controller.toggle_show_rejected();
    }
    controller.commit_search(term);

    let (output, syncs) = {
        let snapshot = controller.snapshot().expect("snapshot fetched");
        let set = render_set(snapshot, controller.query());
        match present_search(&controller, &set) {
            Some(vm) => {
                let syncs: Vec<(SectionKey, usize)> = vm
                    .groups
                    .iter()
                    .map(|group| (group.key, group.effective_page))
                    .collect();
                (format!("{}", SearchView::new(&vm)), syncs)
            }
            None => (
                format!(
                    "No records found for \"{}\". Try a different keyword.\n",
                    term.trim()
                ),
                Vec::new(),
            ),
        }
    };
    for (key, page) in syncs {
        controller.sync_page(key, page);
    }

    print!("{output}");
    Ok(())
}

fn add(ctx: &ExecutionContext, command: AddCommand) -> Result<()> {
    let (mutation, saved) = match command {
        AddCommand::Job {
            title,
            company,
            link,
            applied,
            result,
            status,
            notes,
        } => {
            let saved = format!("job application \"{title}\"");
            (
                Mutation::CreateJob(JobPayload {
                    job_title: title,
                    company,
                    job_link: link,
                    applied_date: applied,
                    result_date: result,
                    status,
                    notes,
                }),
                saved,
            )
        }
        AddCommand::Coding {
            number,
            title,
            pattern,
            link,
            difficulty,
            solved,
        } => {
            let saved = format!("coding problem \"{title}\"");
            (
                Mutation::CreateCoding(CodingPayload {
                    leetcode_number: number,
                    title,
                    pattern,
                    problem_link: link,
                    difficulty,
                    already_solved: solved,
                }),
                saved,
            )
        }
        AddCommand::Project {
            name,
            repo,
            active,
            tech,
            summary,
        } => {
            let saved = format!("project \"{name}\"");
            (
                Mutation::CreateProject(ProjectPayload {
                    name,
                    repo_url: repo,
                    active,
                    tech_stack: parse_tech_stack(&tech),
                    summary,
                }),
                saved,
            )
        }
        AddCommand::Contact {
            name,
            how_met,
            connected,
            company,
            position,
            notes,
        } => {
            let saved = format!("contact \"{name}\"");
            (
                Mutation::CreateContact(ContactPayload {
                    person_name: name,
                    how_met,
                    linkedin_connected: connected,
                    company,
                    position,
                    notes,
                }),
                saved,
            )
        }
    };

    let client = ctx.client()?;
    let mut controller = DashboardController::new(client);
    ctx.block_on(controller.submit(mutation))?;
    println!("Saved {saved}.");
    Ok(())
}

fn goal(ctx: &ExecutionContext, command: GoalCommand) -> Result<()> {
    let GoalCommand::Update {
        cadence,
        id,
        description,
        completed,
    } = command;

    let mut controller = load_controller(ctx)?;
    let record_id = RecordId::from(id);
    ensure_goal_exists(&controller, cadence, &record_id)?;

    if let Some(text) = description {
        controller.edit_goal_description(cadence, record_id.clone(), text);
    }
    if let Some(done) = completed {
        controller.set_goal_completed(cadence, record_id.clone(), done);
    }
    ctx.block_on(controller.save_goal(cadence, record_id.clone()))?;
    println!("Updated {cadence} goal {record_id}.");
    Ok(())
}

fn ensure_goal_exists(
    controller: &DashboardController,
    cadence: GoalCadence,
    id: &RecordId,
) -> Result<()> {
    let snapshot = controller.snapshot().expect("snapshot fetched");
    let known = snapshot
        .goals(cadence)
        .iter()
        .any(|goal| goal.id().as_ref() == Some(id));
    if !known {
        bail!("{cadence} goal {id} not found");
    }
    Ok(())
}
