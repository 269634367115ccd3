//! Command handlers

use log::debug;

use crate::cf::metrics::{summarize, UsageSummary};
use crate::cf::traits::CfResource;
use crate::cf::CfClient;
use crate::cli::{Cli, CurlArgs, GetResource, ListArgs, MetricsArgs};
use crate::error::{CfError, Result};
use crate::output::{output_resources, render_json};
use crate::ui::{create_spinner, finish_spinner};

/// Run `get <resource>`
pub async fn run_get_command(client: &CfClient, cli: &Cli, resource: &GetResource) -> Result<()> {
    match resource {
        GetResource::Orgs(args) => {
            let spinner = create_spinner("Fetching organizations...", cli.quiet);
            let result = match &args.guid {
                Some(guid) => client.get_organization(guid).await.map(|org| vec![org]),
                None => client.get_organizations().await,
            };
            finish_spinner(spinner);

            let orgs = apply_filter(result?, args.common.filter.as_deref());
            output_resources(&orgs, args.common.output, cli.no_header)
        }
        GetResource::Spaces(args) => {
            let spinner = create_spinner("Fetching spaces...", cli.quiet);
            let result: Result<Vec<_>> = async {
                let org_guid = match &args.org {
                    Some(org) => {
                        let orgs = client.get_organizations().await?;
                        Some(find_guid(&orgs, org, "Organization")?)
                    }
                    None => None,
                };
                client.get_spaces(org_guid.as_deref()).await
            }
            .await;
            finish_spinner(spinner);

            let spaces = apply_filter(result?, args.common.filter.as_deref());
            output_resources(&spaces, args.common.output, cli.no_header)
        }
        GetResource::Apps(args) => {
            let spinner = create_spinner("Fetching apps...", cli.quiet);
            let result: Result<Vec<_>> = async {
                let space_guid = match &args.space {
                    Some(space) => {
                        let spaces = client.get_spaces(None).await?;
                        Some(find_guid(&spaces, space, "Space")?)
                    }
                    None => None,
                };
                client.get_apps(space_guid.as_deref()).await
            }
            .await;
            finish_spinner(spinner);

            let apps = apply_filter(result?, args.common.filter.as_deref());
            output_resources(&apps, args.common.output, cli.no_header)
        }
        GetResource::ServiceBindings(args) => {
            let spinner = create_spinner("Fetching service bindings...", cli.quiet);
            let result: Result<Vec<_>> = async {
                let app_guid = match &args.app {
                    Some(app) => {
                        let apps = client.get_apps(None).await?;
                        Some(find_guid(&apps, app, "App")?)
                    }
                    None => None,
                };
                client.get_service_bindings(app_guid.as_deref()).await
            }
            .await;
            finish_spinner(spinner);

            let bindings = apply_filter(result?, args.common.filter.as_deref());
            output_resources(&bindings, args.common.output, cli.no_header)
        }
        GetResource::Events(args) => {
            let spinner = create_spinner("Fetching events...", cli.quiet);
            let event_type = args.event_type.map(|kind| kind.as_api_str());
            let result = client.get_events(event_type).await;
            finish_spinner(spinner);

            let events = apply_filter(result?, args.common.filter.as_deref());
            output_resources(&events, args.common.output, cli.no_header)
        }
    }
}

/// Run `list <path>`: every record of every page, as a JSON array
pub async fn run_list_command(client: &CfClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching {}...", args.path), cli.quiet);
    let result = client
        .fetch_all_pages_with(&args.path, &args.path, Ok)
        .await;
    finish_spinner(spinner);

    let records = result?;
    debug!("{} records from {}", records.len(), args.path);
    println!("{}", render_json(&records)?);
    Ok(())
}

/// Run `curl <path>`: one authenticated GET, body printed as-is
/// (pretty-printed when it is JSON)
pub async fn run_curl_command(client: &CfClient, args: &CurlArgs) -> Result<()> {
    let response = client.execute_get(&args.path).await?;
    match response.json::<serde_json::Value>() {
        Ok(value) => println!("{}", render_json(&value)?),
        Err(_) => println!("{}", response.text()),
    }
    Ok(())
}

/// Run `metrics`: per-org and per-space counts of apps, audit events and bindings
pub async fn run_metrics_command(client: &CfClient, cli: &Cli, args: &MetricsArgs) -> Result<()> {
    let spinner = create_spinner("Collecting usage data...", cli.quiet);
    let result = client.get_usage_data().await;
    finish_spinner(spinner);

    let data = result?;
    let mut summaries: Vec<UsageSummary> = summarize(&data);
    if let Some(org) = &args.org {
        let org_guid = find_guid(&data.orgs, org, "Organization")?;
        summaries.retain(|s| s.organization_guid == org_guid);
    }

    let summaries = apply_filter(summaries, args.common.filter.as_deref());
    output_resources(&summaries, args.common.output, cli.no_header)
}

/// Keep resources whose name contains the filter
fn apply_filter<R: CfResource>(items: Vec<R>, filter: Option<&str>) -> Vec<R> {
    match filter {
        Some(f) => items.into_iter().filter(|r| r.name_contains(f)).collect(),
        None => items,
    }
}

/// Resolve a name or GUID to exactly one resource GUID
fn find_guid<R: CfResource>(items: &[R], input: &str, kind: &str) -> Result<String> {
    let found: Vec<&R> = items.iter().filter(|r| r.matches(input)).collect();
    match found.as_slice() {
        [one] => {
            debug!("Resolved {} '{}' to {}", kind, input, one.guid());
            Ok(one.guid().to_string())
        }
        [] => Err(CfError::NotFound(format!("{} '{}' not found", kind, input))),
        many => Err(CfError::NotFound(format!(
            "{} name '{}' is ambiguous ({} matches); use the GUID instead",
            kind,
            input,
            many.len()
        ))),
    }
}
