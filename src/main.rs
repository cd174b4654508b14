use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use deploy_panel::api::HttpBackend;
use deploy_panel::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use deploy_panel::models::{AppState, DeployMethod, BUTTON_BINDINGS};
use deploy_panel::routes::build_router;
use deploy_panel::surface::TerminalSurface;
use deploy_panel::utils::hostname_from_url;
use deploy_panel::{wiring, DashboardController};

fn backend_from_env(env_file: Option<&str>) -> HttpBackend {
    config::load_env_file(env_file);
    let backend_url = config::get_backend_url();
    match HttpBackend::new(&backend_url) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    }
}

fn terminal_controller(env_file: Option<&str>) -> DashboardController<HttpBackend, TerminalSurface> {
    DashboardController::new(backend_from_env(env_file), TerminalSurface::new())
}

fn parse_method(raw: &str) -> DeployMethod {
    match raw.parse() {
        Ok(method) => method,
        Err(e) => {
            eprintln!("{}; expected one of Web, Kubernetes, Loadbalance, Database", yansi::Paint::new(e).red());
            process::exit(1);
        }
    }
}

async fn start_server(env_file: Option<&str>, host: &str, port: u16) {
    let backend = backend_from_env(env_file);
    let backend_host = hostname_from_url(backend.base_url());
    let state = AppState::new(Arc::new(backend), backend_host);

    // Initial load once the page exists
    wiring::on_ready(&state.controller).await;

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting deploy panel");
    println!("{} {}", yansi::Paint::new("Deploy panel running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn print_bindings() {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Control", "Kind", "Deploy method", "Workflow", "Container"]);
    for b in BUTTON_BINDINGS.iter() {
        table.add_row(vec![
            b.id.to_string(),
            format!("{:?}", b.kind),
            b.deploy_method.to_string(),
            b.workflow.to_string(),
            b.deploy_method.container_id().to_string(),
        ]);
    }
    println!("{table}");
}

#[derive(Parser)]
#[command(
    name = "deploy-panel",
    author,
    version,
    about = "Deployment control panel",
    long_about = r#"Deploy panel: trigger deployment playbooks and watch the records they produce.

The panel talks to a backend exposing /trigger-github-action, /stop-service and /vm-data.
Set PANEL_BACKEND_URL (or pass --env-file) to point at it.

Examples:
  deploy-panel serve --port 8080
  deploy-panel press K8s_Button
  deploy-panel load Database
"#,
    after_help = "Use `deploy-panel <subcommand> --help` for subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to (defaults to PANEL_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to PANEL_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Click a panel control by identifier
    #[command(about = "Click a panel control", long_about = "Run the behaviour bound to a control, e.g. `Web_Button` triggers the Web playbook and reloads the Web panel, `WebStop_Button` stops Web services and reloads every panel.")]
    Press { control_id: String },
    /// Trigger a workflow
    Trigger { workflow: String },
    /// Stop a deploy method's services and delete their records
    Stop { deploy_method: String },
    /// Load records for one deploy method, or all of them
    Load { deploy_method: Option<String> },
    /// Show the control bindings
    Bindings,
    /// Print the resolved configuration
    CheckConfig,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let env_file = cli.env_file.as_deref();

    // No subcommand: serve with defaults
    let Some(command) = cli.command else {
        start_server(env_file, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    };

    match command {
        Commands::Serve { host, port } => {
            config::load_env_file(env_file);
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(env_file, &host, port).await;
        }
        Commands::Press { control_id } => {
            let controller = terminal_controller(env_file);
            let controls = wiring::initialize(&controller);
            if let Err(e) = controls.click(&controller, &control_id).await {
                eprintln!("{}; run `deploy-panel bindings` to list controls", yansi::Paint::new(e).red());
                process::exit(1);
            }
        }
        Commands::Trigger { workflow } => {
            terminal_controller(env_file).trigger_action(&workflow).await;
        }
        Commands::Stop { deploy_method } => {
            let method = parse_method(&deploy_method);
            terminal_controller(env_file).stop_service_and_delete_data(method).await;
        }
        Commands::Load { deploy_method } => {
            let controller = terminal_controller(env_file);
            match deploy_method {
                Some(raw) => {
                    let method = parse_method(&raw);
                    controller.load_service_data(method.default_workflow(), Some(method.as_str())).await;
                }
                None => wiring::on_ready(&controller).await,
            }
        }
        Commands::Bindings => print_bindings(),
        Commands::CheckConfig => {
            config::load_env_file(env_file);
            println!("{} {}", yansi::Paint::new("PANEL_BACKEND_URL").bold(), config::get_backend_url());
            println!("{} {}", yansi::Paint::new("PANEL_HOST").bold(), config::get_host());
            println!("{} {}", yansi::Paint::new("PANEL_PORT").bold(), config::get_port());
        }
    }
}
