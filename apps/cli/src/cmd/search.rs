//! Workspace search command.

use anyhow::{Result, bail};
use ecore::{SearchQuery, SearchScope};
use gateway::Gateway;

/// Run a workspace search and print the hits.
pub async fn run(gateway: &Gateway, text: &str, scope: Option<&str>, limit: usize) -> Result<()> {
    let mut query = SearchQuery::new(text).with_limit(limit);
    if let Some(scope) = scope {
        query = query.scoped(parse_scope(scope)?);
    }

    let hits = gateway.search(&query).await?;
    if hits.is_empty() {
        println!("No matches for '{text}'.");
        return Ok(());
    }
    for hit in hits {
        println!("  [{:?}] {} — {}", hit.scope, hit.title, hit.snippet);
    }
    Ok(())
}

fn parse_scope(s: &str) -> Result<SearchScope> {
    match s {
        "meetings" => Ok(SearchScope::Meetings),
        "documents" => Ok(SearchScope::Documents),
        "emails" => Ok(SearchScope::Emails),
        other => bail!("unknown scope '{other}' (expected meetings, documents, or emails)"),
    }
}
