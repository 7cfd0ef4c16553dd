#![forbid(unsafe_code)]

use jobdeck_contracts::application::ApplicationInput;
use jobdeck_contracts::job::{JobId, JobPostingInput};
use jobdeck_engines::listing::{Listing, ListingConfig, ListingRenderer, TypeFacet};
use jobdeck_pages::{
    dark_mode_enabled, toggle_dark_mode, ApplyPage, ApplyPrompt, ListingPage, PostJobPage,
    APPLY_CONFIRMATION,
};
use jobdeck_storage::store::KeyValueStore;
use jobdeck_storage::{ApplicationRepo, JobBoard};

pub const USAGE: &str = concat!(
    "usage: jobdeck <list|post|save|apply|applications|dark> ...\n",
    "  list [query] [--type <facet>]\n",
    "  post <title> <company> <location> <type> <skills> [logo]\n",
    "  save <job-id>\n",
    "  apply <job-id|-> <name> <email> <resume> [cover-letter]\n",
    "  applications\n",
    "  dark",
);

pub fn execute_command<S: KeyValueStore>(
    board: &mut JobBoard<S>,
    args: &[String],
) -> Result<String, String> {
    let subcommand = args.first().map(String::as_str).ok_or_else(usage)?;
    match subcommand {
        "list" => execute_list(board, &args[1..]),
        "post" => execute_post(board, &args[1..]),
        "save" => execute_save(board, &args[1..]),
        "apply" => execute_apply(board, &args[1..]),
        "applications" => execute_applications(board),
        "dark" => execute_dark(board),
        _ => Err(format!("unknown subcommand: {subcommand}\n{USAGE}")),
    }
}

fn execute_list<S: KeyValueStore>(
    board: &mut JobBoard<S>,
    args: &[String],
) -> Result<String, String> {
    let mut query = String::new();
    let mut facet = TypeFacet::All;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if arg == "--type" {
            let raw = rest
                .next()
                .ok_or_else(|| "missing facet after --type".to_string())?;
            facet = TypeFacet::parse(raw);
        } else if query.is_empty() {
            query = arg.clone();
        } else {
            return Err(usage());
        }
    }

    let mut page = ListingPage::new(board, ListingRenderer::new(ListingConfig::mvp_v1()));
    let listing = if query.is_empty() && facet == TypeFacet::All {
        page.load().map_err(|e| e.to_string())?
    } else {
        page.search(&query, &facet).map_err(|e| e.to_string())?
    };
    Ok(render_listing_text(&listing))
}

fn execute_post<S: KeyValueStore>(
    board: &mut JobBoard<S>,
    args: &[String],
) -> Result<String, String> {
    if args.len() < 5 || args.len() > 6 {
        return Err(usage());
    }
    let input = JobPostingInput {
        title: args[0].clone(),
        company: args[1].clone(),
        location: args[2].clone(),
        job_type: args[3].clone(),
        skills: args[4].clone(),
        logo: args.get(5).cloned().unwrap_or_default(),
    };
    let mut page = PostJobPage::new(board);
    let (posting, _nav) = page.submit(input).map_err(|e| e.to_string())?;
    Ok(format!(
        "posted job {} ({} at {})",
        posting.id.0, posting.title, posting.company
    ))
}

fn execute_save<S: KeyValueStore>(
    board: &mut JobBoard<S>,
    args: &[String],
) -> Result<String, String> {
    let id = parse_job_id(args.first())?;
    let mut page = ListingPage::new(board, ListingRenderer::new(ListingConfig::mvp_v1()));
    let label = page.save_clicked(id).map_err(|e| e.to_string())?;
    Ok(label.to_string())
}

fn execute_apply<S: KeyValueStore>(
    board: &mut JobBoard<S>,
    args: &[String],
) -> Result<String, String> {
    if args.len() < 4 || args.len() > 5 {
        return Err(usage());
    }

    // "-" applies with no selection, mirroring landing on the apply page cold
    if args[0] != "-" {
        let id = parse_job_id(args.first())?;
        let mut page = ListingPage::new(board, ListingRenderer::new(ListingConfig::mvp_v1()));
        page.apply_clicked(id).map_err(|e| e.to_string())?;
    }

    let mut page = ApplyPage::new(board);
    let heading = match page.load().map_err(|e| e.to_string())? {
        ApplyPrompt::Selected { summary, .. } => summary,
        ApplyPrompt::NoSelection { notice } => notice,
    };
    let input = ApplicationInput {
        name: args[1].clone(),
        email: args[2].clone(),
        resume: args[3].clone(),
        cover_letter: args.get(4).cloned().unwrap_or_default(),
    };
    let (app, _nav) = page.submit(input).map_err(|e| e.to_string())?;
    Ok(format!(
        "{heading}\n{APPLY_CONFIRMATION} (application {})",
        app.id.0
    ))
}

fn execute_applications<S: KeyValueStore>(board: &mut JobBoard<S>) -> Result<String, String> {
    let apps = board.applications().map_err(|e| e.to_string())?;
    if apps.is_empty() {
        return Ok("no applications yet".to_string());
    }
    let lines: Vec<String> = apps
        .iter()
        .map(|app| {
            let target = match app.job_id {
                Some(job_id) => format!("job {}", job_id.0),
                None => "no job selected".to_string(),
            };
            format!("{}  {} <{}>  ({target})", app.id.0, app.name, app.email)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn execute_dark<S: KeyValueStore>(board: &mut JobBoard<S>) -> Result<String, String> {
    toggle_dark_mode(board.store_mut()).map_err(|e| e.to_string())?;
    let enabled = dark_mode_enabled(board.store()).map_err(|e| e.to_string())?;
    Ok(if enabled { "dark mode on" } else { "dark mode off" }.to_string())
}

fn render_listing_text(listing: &Listing) -> String {
    match listing {
        Listing::Empty(notice) => notice.message.clone(),
        Listing::Cards(cards) => {
            let blocks: Vec<String> = cards
                .iter()
                .map(|card| {
                    let chips = card.skill_chips.join("] [");
                    format!(
                        "[{}] {}\n  {} • {} • {}\n  skills: [{}]\n  logo: {}\n  [Apply Now] [{}]",
                        card.job_id.0,
                        card.title,
                        card.company,
                        card.location,
                        card.job_type,
                        chips,
                        card.logo_url,
                        card.wishlist_label()
                    )
                })
                .collect();
            blocks.join("\n\n")
        }
    }
}

fn parse_job_id(raw: Option<&String>) -> Result<JobId, String> {
    let raw = raw.ok_or_else(|| "missing job id".to_string())?;
    let id = raw
        .parse::<u64>()
        .map_err(|_| format!("invalid job id: {raw}"))?;
    if id == 0 {
        return Err("invalid job id: 0".to_string());
    }
    Ok(JobId(id))
}

fn usage() -> String {
    USAGE.to_string()
}
