use crate::github::GitHubClient;
use crate::models::{RepoRow, UserRow};
use tracing::{info, warn};

/// The two accumulated datasets of one collection run.
#[derive(Debug, Default)]
pub struct Harvest {
    pub users: Vec<UserRow>,
    pub repositories: Vec<RepoRow>,
}

/// Run the end-to-end collection: advisory token check, search, then one
/// detail + repository pass per candidate.
///
/// A single user's failure never aborts the batch; the failed user is
/// skipped entirely (no row, no repositories). Remote failures never
/// escalate out of this function: the caller always gets a `Harvest`,
/// possibly empty.
pub async fn collect(client: &GitHubClient, query: &str) -> Harvest {
    match client.check_rate_limit().await {
        Ok(status) => info!(
            remaining = status.rate.remaining,
            limit = status.rate.limit,
            "token authentication successful"
        ),
        // The run continues on a failed check; the search itself will
        // surface any real credential problem per user.
        Err(err) => warn!(error = %err, "token check failed, continuing anyway"),
    }

    let candidates = client.search_users(query).await;
    info!(count = candidates.len(), query, "search complete");

    let mut harvest = Harvest::default();

    for candidate in &candidates {
        let detail = match client.get_user(&candidate.login).await {
            Ok(detail) => detail,
            Err(err) => {
                warn!(login = %candidate.login, error = %err, "skipping user");
                continue;
            }
        };

        let repos = client.fetch_repositories(&detail.login).await;
        info!(login = %detail.login, repos = repos.len(), "collected user");

        harvest
            .repositories
            .extend(repos.iter().map(|repo| RepoRow::new(&detail.login, repo)));
        harvest.users.push(UserRow::from_detail(&detail));
    }

    harvest
}
