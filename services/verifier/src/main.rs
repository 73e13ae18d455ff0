use uuid::Uuid;

use verity_common::error::{VerityError, VerityResult};
use verity_common::types::ServiceInfo;
use verity_config::{init_tracing, AppConfig};
use verity_db::authors::pg_repository::PgAuthorRepository;
use verity_db::claims::pg_repository::PgClaimRepository;
use verity_db::feedback::pg_repository::PgFeedbackRepository;
use verity_verification::{
    AdjudicationClient, AdjudicationClientConfig, ClaimService, FactCheckClient,
    FactCheckClientConfig, SearchClient, SearchClientConfig, VerificationOrchestrator,
};

const USAGE: &str = "usage: verity-verifier <author-uuid> <claim text...>";

#[derive(Debug, PartialEq)]
struct Invocation {
    author_id: Uuid,
    content: String,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> VerityResult<Invocation> {
    let mut args = args.into_iter();

    let author_id = args
        .next()
        .ok_or_else(|| VerityError::Validation(USAGE.to_string()))?
        .parse::<Uuid>()
        .map_err(|e| VerityError::Validation(format!("invalid author id: {e}")))?;

    let content = args.collect::<Vec<_>>().join(" ");
    if content.trim().is_empty() {
        return Err(VerityError::Validation(USAGE.to_string()));
    }

    Ok(Invocation { author_id, content })
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_tracing("info");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "verification failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> VerityResult<()> {
    let invocation = parse_args(std::env::args().skip(1))?;

    let info = ServiceInfo::new("verity-verifier");
    tracing::info!(service = %info.name, version = %info.version, instance = %info.instance_id, "starting");

    let config = AppConfig::from_env()?;
    let pool = verity_db::create_pool(&config.database_url).await?;

    // Unconfigured sources contribute no evidence; an unconfigured model leaves claims pending.
    let fact_check = FactCheckClientConfig::from_env()
        .map(FactCheckClient::new)
        .transpose()
        .map_err(|e| VerityError::Config(format!("fact-check client: {e}")))?;
    if fact_check.is_none() {
        tracing::info!("no fact-check credentials found, skipping fact-check evidence");
    }

    let search = SearchClientConfig::from_env()
        .map(SearchClient::new)
        .transpose()
        .map_err(|e| VerityError::Config(format!("search client: {e}")))?;
    if search.is_none() {
        tracing::info!("no search credentials found, skipping search evidence");
    }

    let adjudicator = AdjudicationClientConfig::from_env()
        .map(AdjudicationClient::new)
        .transpose()
        .map_err(|e| VerityError::Config(format!("adjudication client: {e}")))?;
    if adjudicator.is_none() {
        tracing::warn!("no adjudication credentials found, claims will stay pending");
    }

    let service = ClaimService::new(
        PgClaimRepository::new(pool.clone()),
        PgFeedbackRepository::new(pool.clone()),
        PgAuthorRepository::new(pool),
        VerificationOrchestrator::new(fact_check, search, adjudicator),
    );

    let view = service
        .process_claim(&invocation.content, invocation.author_id)
        .await?;

    let rendered = serde_json::to_string_pretty(&view)
        .map_err(|e| VerityError::Internal(format!("failed to render claim: {e}")))?;
    println!("{rendered}");

    tracing::info!("verifier finished");
    Ok(())
}
