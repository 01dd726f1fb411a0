use crate::infra::{keyword_search_service, load_catalog};
use clap::Args;
use rental_search::error::AppError;
use rental_search::workflows::catalog::Listing;
use rental_search::workflows::engagement::{
    Dashboard, EngagementAction, EngagementBucket, EngagementSession,
};
use rental_search::workflows::search::SearchOutcome;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// What you are looking for, e.g. "2 bedroom near BART under $4000"
    pub(crate) query: String,
    /// Catalog file (.json or .csv). Defaults to the built-in listings.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the outcome as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog file (.json or .csv). Defaults to the built-in listings.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

const DEMO_QUERIES: [&str; 3] = [
    "2 bedroom apartment under $4500",
    "pet friendly place near transit in San Francisco",
    "furnished studio",
];

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = keyword_search_service(catalog);
    let outcome = service.search(&args.query);

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Search outcome unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_outcome(&outcome);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = keyword_search_service(Arc::clone(&catalog));
    let session = EngagementSession::new(Arc::clone(&catalog));

    println!("Rental search demo ({} listings)", catalog.len());
    for query in DEMO_QUERIES {
        println!();
        let outcome = service.search(query);
        render_outcome(&outcome);
        session.record_results(&outcome.listings);
    }

    let Some(first) = catalog.iter().next().map(|listing| listing.id.clone()) else {
        println!("\nCatalog is empty; skipping the engagement walk-through");
        return Ok(());
    };
    let last = catalog
        .iter()
        .last()
        .map(|listing| listing.id.clone())
        .unwrap_or_else(|| first.clone());

    println!("\nEngagement walk-through");
    let script = [
        (EngagementAction::Contact, last.clone()),
        (EngagementAction::Apply, last.clone()),
        (EngagementAction::ScheduleTour, last.clone()),
        (EngagementAction::Contact, first.clone()),
        (EngagementAction::Apply, first.clone()),
    ];
    for (action, id) in script {
        let transition = session.apply(action, &id);
        println!(
            "- {} on listing {}: {} -> {}",
            action.label(),
            id,
            bucket_name(transition.from),
            bucket_name(transition.to)
        );
    }

    render_dashboard(&session.dashboard());

    let transition = session.remove(&first);
    println!(
        "\nRemoved listing {} (was {}); {} listing(s) still tracked, {} in current results",
        first,
        bucket_name(transition.from),
        session.counts().total(),
        session.results().len()
    );

    Ok(())
}

fn render_outcome(outcome: &SearchOutcome) {
    println!("Search: \"{}\"", outcome.query);
    if let Some(message) = &outcome.message {
        println!("  Note: {message}");
    }

    let constraints = outcome.criteria.describe();
    if constraints.is_empty() {
        println!("  Criteria: none (showing everything)");
    } else {
        println!("  Criteria: {}", constraints.join(", "));
    }

    println!("  {} match(es)", outcome.count());
    for listing in &outcome.listings {
        render_listing(listing);
    }
}

fn render_listing(listing: &Listing) {
    println!(
        "    [{}] {} | ${}/mo | {} | {}, {}",
        listing.id,
        listing.title,
        listing.price,
        listing.layout_label(),
        listing.location.neighborhood,
        listing.location.city
    );
}

fn render_dashboard(dashboard: &Dashboard) {
    println!(
        "\nDashboard: {} applied | {} in contact | {} tours scheduled",
        dashboard.counts.applied, dashboard.counts.in_contact, dashboard.counts.scheduled
    );
    for view in &dashboard.buckets {
        println!("{} ({})", view.label, view.count);
        if view.listings.is_empty() && view.unresolved.is_empty() {
            println!("    {}", view.description);
        }
        for listing in &view.listings {
            render_listing(listing);
        }
        for id in &view.unresolved {
            println!("    [{id}] no longer in the catalog");
        }
    }
}

fn bucket_name(bucket: Option<EngagementBucket>) -> &'static str {
    bucket.map_or("untracked", |bucket| bucket.label())
}
