// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use tenant_invest_client::{
    auth::{redirect_path, Role},
    config::ClientConfig,
    logging,
    models::{
        DepositRequest, KycSubmission, RegisterRequest, TransactionQuery, TransactionStatus,
        TransactionType, WithdrawRequest,
    },
    routes::{navigate, Navigation},
    views::{SortOrder, TransactionFilter},
    AppContext, ClientError,
};

#[derive(Parser)]
#[command(name = "invest-cli")]
#[command(about = "Command line front end for the multi-tenant investment platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "INVEST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "INVEST_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        referral_code: Option<String>,
    },
    /// Drop the stored session
    Logout,
    /// Refresh and print the session user
    Whoami,
    /// Resolve a client route for the current session
    Route {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Role-specific dashboard
    Dashboard,
    /// Wallet balance and deposit addresses
    Wallet,
    /// Transaction history with client-side filtering
    Transactions {
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "date-desc")]
        sort: String,
    },
    /// Request a deposit
    Deposit {
        amount: f64,
        crypto: String,
        #[arg(long)]
        tx_hash: Option<String>,
    },
    /// Request a withdrawal
    Withdraw {
        amount: f64,
        crypto: String,
        address: String,
    },
    /// Investment plans, positions and copy trading
    #[command(subcommand)]
    Invest(InvestCommands),
    /// KYC status and submission
    #[command(subcommand)]
    Kyc(KycCommands),
    /// Notification inbox
    Notifications {
        /// Mark everything as read after listing
        #[arg(long)]
        mark_all_read: bool,
    },
    /// Referral code and earnings
    Referrals,
    /// Market ticker and sentiment
    Market,
    /// Tenant administration
    #[command(subcommand)]
    Admin(AdminCommands),
}

#[derive(Subcommand)]
enum InvestCommands {
    /// List available plans
    Plans,
    /// List own investments
    List,
    /// Invest in a plan
    Create { plan_id: String, amount: f64 },
    /// List investments available for copy trading
    Feed,
    /// Copy another user's active investment
    Copy { investment_id: String, amount: f64 },
}

#[derive(Subcommand)]
enum KycCommands {
    /// Show the current KYC request
    Status,
    /// Submit identity details
    Submit {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        date_of_birth: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        id_type: String,
        #[arg(long)]
        id_number: String,
        #[arg(long)]
        document_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Pending transactions
    Pending,
    /// Approve a transaction
    Approve { tx_id: String },
    /// Reject a transaction
    Reject { tx_id: String, reason: String },
    /// Pending KYC requests
    KycRequests,
    /// Approve a KYC request
    ApproveKyc { kyc_id: String },
    /// Reject a KYC request
    RejectKyc { kyc_id: String, reason: String },
    /// Trigger ROI distribution
    DistributeRoi,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| ClientError::Decode {
        message: "Failed to render output".to_string(),
        detail: e.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}

fn parse_filter(
    kind: Option<String>,
    status: Option<String>,
    search: Option<String>,
    sort: &str,
) -> Result<TransactionFilter, ClientError> {
    let mut filter = TransactionFilter {
        search,
        sort: sort.parse::<SortOrder>().map_err(ClientError::Config)?,
        ..TransactionFilter::default()
    };
    if let Some(raw) = kind {
        filter.kind = Some(
            TransactionType::parse(&raw)
                .ok_or_else(|| ClientError::Config(format!("unknown transaction type: {raw}")))?,
        );
    }
    if let Some(raw) = status {
        filter.status = Some(
            TransactionStatus::parse(&raw)
                .ok_or_else(|| ClientError::Config(format!("unknown transaction status: {raw}")))?,
        );
    }
    Ok(filter)
}

async fn run(ctx: AppContext, command: Commands) -> Result<(), ClientError> {
    let client = &ctx.platform;
    match command {
        Commands::Login { email, password } => {
            let response = client.auth().login(&email, &password).await?;
            println!(
                "Logged in as {} ({}), landing on {}",
                response.user.name,
                response.user.role_name,
                redirect_path(&response.user.role_name)
            );
        }
        Commands::Register {
            name,
            email,
            password,
            referral_code,
        } => {
            let request = RegisterRequest {
                name,
                email,
                password,
                referral_code,
            };
            let response = client.auth().register(&request).await?;
            println!("Registered {} ({})", response.user.name, response.user.email);
        }
        Commands::Logout => {
            client.auth().logout();
            println!("Logged out");
        }
        Commands::Whoami => match client.auth().boot().await {
            Some(user) => print_json(&user)?,
            None => println!("Not logged in"),
        },
        Commands::Route { path } => {
            let user = ctx.session.current_user();
            match navigate(&path, user.as_ref()) {
                Navigation::Render(route) => println!("render {}", route.path()),
                Navigation::Redirect(to) => println!("redirect {to}"),
            }
        }
        Commands::Dashboard => {
            let role = ctx
                .session
                .current_user()
                .and_then(|u| u.role())
                .unwrap_or_default();
            match role {
                Role::SuperAdmin => {
                    print_json(&client.dashboard().super_admin().await?)?
                }
                Role::TenantAdmin => {
                    print_json(&client.dashboard().admin().await?)?
                }
                Role::Investor => {
                    print_json(&client.dashboard().investor().await?)?
                }
            }
        }
        Commands::Wallet => {
            print_json(&client.wallet().get_wallet().await?)?;
            print_json(&client.wallet().payment_addresses().await?)?;
        }
        Commands::Transactions {
            kind,
            status,
            search,
            sort,
        } => {
            let filter = parse_filter(kind, status, search, &sort)?;
            let page = client
                .transactions()
                .list(&TransactionQuery::default())
                .await?;
            print_json(&filter.apply(&page.transactions))?;
        }
        Commands::Deposit {
            amount,
            crypto,
            tx_hash,
        } => {
            let request = DepositRequest {
                amount,
                crypto,
                tx_hash,
            };
            print_json(&client.transactions().deposit(&request).await?)?;
        }
        Commands::Withdraw {
            amount,
            crypto,
            address,
        } => {
            let request = WithdrawRequest {
                amount,
                crypto,
                address,
            };
            print_json(&client.transactions().withdraw(&request).await?)?;
        }
        Commands::Invest(cmd) => {
            let investments = client.investments();
            match cmd {
                InvestCommands::Plans => print_json(&investments.plans().await?)?,
                InvestCommands::List => print_json(&investments.list().await?)?,
                InvestCommands::Create { plan_id, amount } => {
                    print_json(&investments.create(&plan_id, amount).await?)?
                }
                InvestCommands::Feed => print_json(&investments.copy_trading_feed().await?)?,
                InvestCommands::Copy {
                    investment_id,
                    amount,
                } => print_json(&investments.copy(&investment_id, amount).await?)?,
            }
        }
        Commands::Kyc(cmd) => match cmd {
            KycCommands::Status => match client.kyc().status().await? {
                Some(kyc) => print_json(&kyc)?,
                None => println!("No KYC submitted"),
            },
            KycCommands::Submit {
                first_name,
                last_name,
                date_of_birth,
                country,
                id_type,
                id_number,
                document_url,
            } => {
                let submission = KycSubmission {
                    first_name,
                    last_name,
                    date_of_birth,
                    country,
                    id_type,
                    id_number,
                    document_url,
                };
                print_json(&client.kyc().submit(&submission).await?)?;
            }
        },
        Commands::Notifications { mark_all_read } => {
            let notifications = client.notifications();
            print_json(&notifications.list().await?)?;
            if mark_all_read {
                notifications.mark_all_read().await?;
                println!("All notifications marked as read");
            }
        }
        Commands::Referrals => print_json(&client.user().referrals().await?)?,
        Commands::Market => {
            let assets = ctx.market.fetch_prices().await;
            print_json(&assets)?;
            println!("{}", ctx.insight.market_sentiment(&assets).await);
        }
        Commands::Admin(cmd) => {
            let admin = client.admin();
            match cmd {
                AdminCommands::Pending => {
                    print_json(&admin.transactions(Some(TransactionStatus::Pending)).await?)?
                }
                AdminCommands::Approve { tx_id } => {
                    print_json(&admin.approve_transaction(&tx_id).await?)?
                }
                AdminCommands::Reject { tx_id, reason } => {
                    print_json(&admin.reject_transaction(&tx_id, &reason).await?)?
                }
                AdminCommands::KycRequests => print_json(&admin.kyc_requests().await?)?,
                AdminCommands::ApproveKyc { kyc_id } => {
                    print_json(&admin.approve_kyc(&kyc_id).await?)?
                }
                AdminCommands::RejectKyc { kyc_id, reason } => {
                    print_json(&admin.reject_kyc(&kyc_id, &reason).await?)?
                }
                AdminCommands::DistributeRoi => print_json(&admin.distribute_roi().await?)?,
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_format);

    let ctx = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "failed to initialize client");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
