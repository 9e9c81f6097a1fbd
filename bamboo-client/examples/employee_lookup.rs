// bamboo-client/examples/employee_lookup.rs
// Look up employees from the command line
//
// Reads BAMBOOHR_COMPANY / BAMBOOHR_BASE_URL and BAMBOOHR_API_KEY (a .env file works too).

use bamboo_client::{
    CancellationToken, ClientConfig, EmployeeClient, EmployeeField, EmployeeFields,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bamboo_client=debug".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <work-email|--directory> [Field ...]", args[0]);
        println!("  Example: {} jane@acme.com JobTitle Department", args[0]);
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    let client = EmployeeClient::from_config(&config)?;

    // Ctrl+C aborts the in-flight request
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    if args[1] == "--directory" {
        let directory = client.employee_directory(&cancel).await?;
        for employee in &directory {
            println!(
                "{:>6}  {:<30}  {}",
                employee.id,
                employee.display_name.as_deref().unwrap_or("-"),
                employee.work_email.as_deref().unwrap_or("-"),
            );
        }
        tracing::info!("{} employees", directory.len());
        return Ok(());
    }

    let fields = args[2..]
        .iter()
        .map(|raw| raw.parse::<EmployeeField>())
        .collect::<Result<EmployeeFields, _>>()?;

    let employee = client.employee_by_email(&cancel, &args[1], fields).await?;
    println!("{}", serde_json::to_string_pretty(&employee)?);

    Ok(())
}
