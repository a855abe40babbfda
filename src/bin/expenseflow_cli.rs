use std::{env, process, str::FromStr, sync::Arc};

use expenseflow_core::{
    config::ConfigManager,
    core::services::{CategoryChanges, CategoryService, TransactionService},
    domain::{rust_decimal::Decimal, uuid::Uuid, TransactionDraft, TransactionType, User, UserId},
    init,
    storage::{JsonStore, LedgerWriter},
    utils::build_info,
    InsightsEngine,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| usage_exit());

    if command == "version" {
        println!("{}", serde_json::to_string_pretty(&build_info::current())?);
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let store = Arc::new(JsonStore::open(Some(manager.data_dir(&config)))?);
    let engine = InsightsEngine::new(store.clone());
    let now = chrono::Utc::now();

    match command.as_str() {
        "stats" => {
            let user = parse_user(args.next())?;
            print_json(&engine.compute_statistics(user)?)?;
        }
        "report" => {
            let user = parse_user(args.next())?;
            let period = args
                .next()
                .unwrap_or_else(|| config.default_period.as_str().to_string());
            let currency = args.next().unwrap_or_else(|| config.currency_symbol.clone());
            print_json(&engine.build_report(user, &period, &currency)?)?;
        }
        "alert" => {
            let user = parse_user(args.next())?;
            let category = args.next().unwrap_or_else(|| usage_exit());
            print_json(&engine.evaluate_budget_alert(user, &category)?)?;
        }
        "user" => match args.next().as_deref() {
            Some("add") => {
                let name = args.next().unwrap_or_else(|| usage_exit());
                let email = args.next().unwrap_or_else(|| usage_exit());
                let user = User::new(&name, &email)?;
                store.insert_user(user.clone())?;
                print_json(&user)?;
            }
            _ => usage_exit(),
        },
        "txn" => match args.next().as_deref() {
            Some("add") => {
                let user = parse_user(args.next())?;
                let kind = TransactionType::from_str(&args.next().unwrap_or_else(|| usage_exit()))?;
                let amount = parse_amount(args.next())?;
                let category = args.next().unwrap_or_else(|| usage_exit());
                let description = args.collect::<Vec<_>>().join(" ");
                let draft = TransactionDraft::new(kind, amount, category, description);
                print_json(&TransactionService::record(store.as_ref(), user, draft, now)?)?;
            }
            Some("get") => {
                let user = parse_user(args.next())?;
                let id = parse_id(args.next())?;
                print_json(&TransactionService::get(store.as_ref(), user, id)?)?;
            }
            Some("update") => {
                let user = parse_user(args.next())?;
                let id = parse_id(args.next())?;
                let kind = TransactionType::from_str(&args.next().unwrap_or_else(|| usage_exit()))?;
                let amount = parse_amount(args.next())?;
                let category = args.next().unwrap_or_else(|| usage_exit());
                let description = args.collect::<Vec<_>>().join(" ");
                let draft = TransactionDraft::new(kind, amount, category, description);
                print_json(&TransactionService::update(store.as_ref(), user, id, draft)?)?;
            }
            _ => usage_exit(),
        },
        "budget" => match args.next().as_deref() {
            Some("set") => {
                let user = parse_user(args.next())?;
                let category = args.next().unwrap_or_else(|| usage_exit());
                let budget = parse_amount(args.next())?;
                let changes = CategoryChanges::budget(Some(budget));
                print_json(&CategoryService::update(store.as_ref(), user, &category, changes)?)?;
            }
            Some("clear") => {
                let user = parse_user(args.next())?;
                let category = args.next().unwrap_or_else(|| usage_exit());
                let changes = CategoryChanges::budget(None);
                print_json(&CategoryService::update(store.as_ref(), user, &category, changes)?)?;
            }
            _ => usage_exit(),
        },
        _ => usage_exit(),
    }

    Ok(())
}

fn parse_user(arg: Option<String>) -> CliResult<UserId> {
    let raw = arg.unwrap_or_else(|| usage_exit());
    Uuid::parse_str(&raw).map_err(|err| format!("invalid user id `{raw}`: {err}").into())
}

fn parse_id(arg: Option<String>) -> CliResult<Uuid> {
    let raw = arg.unwrap_or_else(|| usage_exit());
    Uuid::parse_str(&raw).map_err(|err| format!("invalid transaction id `{raw}`: {err}").into())
}

fn parse_amount(arg: Option<String>) -> CliResult<Decimal> {
    let raw = arg.unwrap_or_else(|| usage_exit());
    Decimal::from_str(&raw).map_err(|err| format!("invalid amount `{raw}`: {err}").into())
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn usage_exit() -> ! {
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!(
        "Usage: expenseflow_cli <command>\n\
         Commands:\n  \
         stats <user-id>\n  \
         report <user-id> [week|month|year] [currency]\n  \
         alert <user-id> <category>\n  \
         user add <name> <email>\n  \
         txn add <user-id> <income|expense> <amount> <category> <description...>\n  \
         txn get <user-id> <transaction-id>\n  \
         txn update <user-id> <transaction-id> <income|expense> <amount> <category> <description...>\n  \
         budget set <user-id> <category> <amount>\n  \
         budget clear <user-id> <category>\n  \
         version"
    );
}
