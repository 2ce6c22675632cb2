//! treasury-workbench CLI
//!
//! Run treasury calculations from the command line, pulling inputs from
//! flags, a saved session file, or both.
//!
//! # Usage
//!
//! ```bash
//! # One-off calculation from flags
//! treasury-workbench impact --revenue-cny 6500000 --initial-rate 7.1 --new-rate 7.3
//!
//! # Persist inputs, then calculate from the session file
//! treasury-workbench set --session q3.json revenue_cny=6500000 initial_rate=7.1 new_rate=7.3
//! treasury-workbench impact --session q3.json --format json
//!
//! # Plot the entered cash flows
//! treasury-workbench plot --cash-flows "100,250,-50,300"
//! ```

use log::info;
use rand::Rng;
use std::fs;
use std::process;
use treasury_workbench::formulas::financing::{interest_savings, political_risk_insurance};
use treasury_workbench::formulas::fx::{convert_currency, simulate_exchange_rate_impact};
use treasury_workbench::formulas::hedging::hedged_revenue;
use treasury_workbench::formulas::valuation::npv;
use treasury_workbench::session::document::SessionDocument;
use treasury_workbench::session::field::{FieldKey, ScenarioGroup};
use treasury_workbench::session::store::Session;
use treasury_workbench::simulation::shock::{rate_shock_sweep, ShockGrid};

fn print_usage() {
    eprintln!(
        r#"treasury-workbench — FX exposure, hedging, NPV and funding analytics

USAGE:
    treasury-workbench <COMMAND> [OPTIONS]

COMMANDS:
    impact      Simulate the USD impact of a CNY/USD rate change
    hedge       Total USD revenue with partial forward hedging
    npv         Net present value of a cash-flow series
    plot        Text chart of the cash-flow series
    sweep       Impact table across shocked rates
    insurance   Political-risk insurance coverage and premium
    savings     Annual interest saved by eurobond funding
    convert     Convert an amount at a CNY/USD rate
    set         Update fields in a session file (key=value ...)
    show        Print the fields of a session file
    generate    Write a session file with randomized sample values
    help        Show this message

OPTIONS (calculations):
    --session <FILE>        Read inputs from a saved session document
    --format <FORMAT>       Output format: text (default) or json
    --revenue-cny <N>       Override the revenue_cny field
    --initial-rate <N>      Override the initial_rate field
    --new-rate <N>          Override the new_rate field
    --hedged-percentage <N> Override the hedged_percentage field
    --forward-rate <N>      Override the forward_rate field
    --discount-rate <N>     Override the discount_rate field
    --cash-flows <LIST>     Override the cash_flows field (comma-separated)
    --investment <N>        Override the investment field
    --premium-rate <N>      Override the premium_rate field
    --capital-amount <N>    Override the capital_amount field
    --domestic-rate <N>     Override the domestic_rate field
    --eurobond-rate <N>     Override the eurobond_rate field

OPTIONS (sweep):
    --max-shock <N>         Largest shock either side, fraction (default 0.10)
    --steps <N>             Steps each side of zero (default 10)

OPTIONS (convert):
    --amount <N>            Amount to convert (defaults to revenue_cny)
    --rate <N>              CNY/USD rate (defaults to initial_rate)

EXAMPLES:
    treasury-workbench impact --revenue-cny 6500000 --initial-rate 7.1 --new-rate 7.3
    treasury-workbench npv --discount-rate 0.1 --cash-flows "100,100,100"
    treasury-workbench set --session q3.json investment=1000000 premium_rate=0.05
    treasury-workbench insurance --session q3.json --format json
    treasury-workbench generate --output sample.json"#
    );
}

/// Field flags shared by all calculation commands.
const FIELD_FLAGS: [(&str, FieldKey); 12] = [
    ("--revenue-cny", FieldKey::RevenueCny),
    ("--initial-rate", FieldKey::InitialRate),
    ("--new-rate", FieldKey::NewRate),
    ("--hedged-percentage", FieldKey::HedgedPercentage),
    ("--forward-rate", FieldKey::ForwardRate),
    ("--discount-rate", FieldKey::DiscountRate),
    ("--cash-flows", FieldKey::CashFlows),
    ("--investment", FieldKey::Investment),
    ("--premium-rate", FieldKey::PremiumRate),
    ("--capital-amount", FieldKey::CapitalAmount),
    ("--domestic-rate", FieldKey::DomesticRate),
    ("--eurobond-rate", FieldKey::EurobondRate),
];

/// Inputs gathered for a calculation command.
struct CommandInputs {
    session: Session,
    format: String,
    /// Flags the command-specific loop did not recognize.
    extra: Vec<String>,
}

/// Parse `--session`, `--format` and field-override flags.
///
/// The session file (if any) is restored first; flag overrides are
/// applied on top regardless of argument order.
fn gather_inputs(args: &[String]) -> CommandInputs {
    let mut session_path: Option<String> = None;
    let mut format = "text".to_string();
    let mut overrides: Vec<(FieldKey, String)> = Vec::new();
    let mut extra = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--session" {
            i += 1;
            session_path = Some(require_value(args, i, "--session"));
        } else if arg == "--format" {
            i += 1;
            format = require_value(args, i, "--format");
        } else if let Some((_, key)) = FIELD_FLAGS.iter().find(|(flag, _)| *flag == arg) {
            i += 1;
            overrides.push((*key, require_value(args, i, arg)));
        } else {
            extra.push(args[i].clone());
        }
        i += 1;
    }

    let mut session = Session::new();
    if let Some(path) = session_path {
        session.restore(&read_document(&path));
        info!("loaded session from {}", path);
    }
    for (key, text) in overrides {
        session.set(key, text);
    }

    CommandInputs {
        session,
        format,
        extra,
    }
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn reject_extra(extra: &[String]) {
    if let Some(unknown) = extra.first() {
        eprintln!("Unknown option: {}", unknown);
        process::exit(1);
    }
}

fn read_document(path: &str) -> SessionDocument {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });
    SessionDocument::from_json_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing '{}': {}", path, e);
        process::exit(1);
    })
}

fn write_session(path: &str, session: &Session) {
    let json = session.snapshot().to_json_string().unwrap_or_else(|e| {
        eprintln!("Error encoding session: {}", e);
        process::exit(1);
    });
    fs::write(path, json).unwrap_or_else(|e| {
        eprintln!("Error writing to '{}': {}", path, e);
        process::exit(1);
    });
    info!("saved session to {}", path);
}

fn require_number(session: &Session, key: FieldKey) -> f64 {
    session.number(key).unwrap_or_else(|e| {
        eprintln!("Input error: {}", e);
        process::exit(1);
    })
}

fn require_cash_flows(session: &Session, key: FieldKey) -> Vec<f64> {
    session.cash_flows(key).unwrap_or_else(|e| {
        eprintln!("Input error: {}", e);
        process::exit(1);
    })
}

fn print_result<T: serde::Serialize + std::fmt::Display>(result: &T, format: &str) {
    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(result).unwrap_or_else(|e| {
                eprintln!("Error encoding result: {}", e);
                process::exit(1);
            })
        );
    } else {
        println!("{}", result);
    }
}

fn cmd_impact(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let revenue = require_number(&inputs.session, FieldKey::RevenueCny);
    let initial = require_number(&inputs.session, FieldKey::InitialRate);
    let new = require_number(&inputs.session, FieldKey::NewRate);

    let result = simulate_exchange_rate_impact(revenue, initial, new).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    print_result(&result, &inputs.format);
}

fn cmd_hedge(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let revenue = require_number(&inputs.session, FieldKey::RevenueCny);
    let pct = require_number(&inputs.session, FieldKey::HedgedPercentage);
    let forward = require_number(&inputs.session, FieldKey::ForwardRate);
    let initial = require_number(&inputs.session, FieldKey::InitialRate);

    let result = hedged_revenue(revenue, pct, forward, initial).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    print_result(&result, &inputs.format);
}

fn cmd_npv(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let rate = require_number(&inputs.session, FieldKey::DiscountRate);
    let flows = require_cash_flows(&inputs.session, FieldKey::CashFlows);

    let value = npv(rate, &flows).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if inputs.format == "json" {
        println!("{}", serde_json::json!({ "npv": value }));
    } else {
        println!("NPV of Project: ${:.2}", value);
    }
}

fn cmd_plot(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let flows = require_cash_flows(&inputs.session, FieldKey::CashFlows);
    print!("{}", render_cash_flow_chart(&flows));
}

/// Render the cash-flow series as a horizontal bar chart.
fn render_cash_flow_chart(flows: &[f64]) -> String {
    const WIDTH: usize = 40;
    let max_abs = flows.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

    let mut out = String::from("Cash Flows Over Time\n");
    out.push_str(&format!("{:>4}  {:>15}\n", "Year", "Cash Flow"));
    for (year, flow) in flows.iter().enumerate() {
        let len = if max_abs == 0.0 {
            0
        } else {
            ((flow.abs() / max_abs) * WIDTH as f64).round() as usize
        };
        let bar: String = std::iter::repeat('█').take(len).collect();
        out.push_str(&format!("{:>4}  {:>15.2}  {}\n", year, flow, bar));
    }
    out
}

fn cmd_sweep(args: &[String]) {
    let inputs = gather_inputs(args);

    let mut grid = ShockGrid::default();
    let mut i = 0;
    while i < inputs.extra.len() {
        match inputs.extra[i].as_str() {
            "--max-shock" => {
                i += 1;
                grid.max_shock = inputs.extra.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--max-shock requires a number");
                    process::exit(1);
                });
            }
            "--steps" => {
                i += 1;
                grid.steps = inputs.extra.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--steps requires a positive integer");
                    process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let revenue = require_number(&inputs.session, FieldKey::RevenueCny);
    let initial = require_number(&inputs.session, FieldKey::InitialRate);
    let new = require_number(&inputs.session, FieldKey::NewRate);

    let rows = rate_shock_sweep(revenue, initial, new, &grid).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if inputs.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|e| {
                eprintln!("Error encoding result: {}", e);
                process::exit(1);
            })
        );
    } else {
        println!(
            "{:>8}  {:>10}  {:>15}  {:>15}",
            "Shock", "Rate", "New USD", "Impact"
        );
        for row in rows {
            println!(
                "{:>7.1}%  {:>10.4}  {:>15.2}  {:>15.2}",
                row.shock * 100.0,
                row.shocked_rate,
                row.impact.new_usd,
                row.impact.impact
            );
        }
    }
}

fn cmd_insurance(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let investment = require_number(&inputs.session, FieldKey::Investment);
    let premium_rate = require_number(&inputs.session, FieldKey::PremiumRate);

    let result = political_risk_insurance(investment, premium_rate);
    print_result(&result, &inputs.format);
}

fn cmd_savings(args: &[String]) {
    let inputs = gather_inputs(args);
    reject_extra(&inputs.extra);

    let capital = require_number(&inputs.session, FieldKey::CapitalAmount);
    let domestic = require_number(&inputs.session, FieldKey::DomesticRate);
    let eurobond = require_number(&inputs.session, FieldKey::EurobondRate);

    let result = interest_savings(capital, domestic, eurobond);
    print_result(&result, &inputs.format);
}

fn cmd_convert(args: &[String]) {
    // --amount and --rate alias the revenue and spot-rate fields the
    // conversion reads.
    let rewritten: Vec<String> = args
        .iter()
        .map(|a| match a.as_str() {
            "--amount" => "--revenue-cny".to_string(),
            "--rate" => "--initial-rate".to_string(),
            _ => a.clone(),
        })
        .collect();

    let inputs = gather_inputs(&rewritten);
    reject_extra(&inputs.extra);

    let amount = require_number(&inputs.session, FieldKey::RevenueCny);
    let rate = require_number(&inputs.session, FieldKey::InitialRate);

    let converted = convert_currency(amount, rate).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if inputs.format == "json" {
        println!("{}", serde_json::json!({ "converted_usd": converted }));
    } else {
        println!("Converted Amount in USD: ${:.2}", converted);
    }
}

fn cmd_set(args: &[String]) {
    let mut session_path: Option<String> = None;
    let mut assignments: Vec<(FieldKey, String)> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--session" {
            i += 1;
            session_path = Some(require_value(args, i, "--session"));
        } else if let Some((name, value)) = arg.split_once('=') {
            let key = FieldKey::from_name(name).unwrap_or_else(|| {
                eprintln!("Unknown field: {}", name);
                eprintln!("Valid fields:");
                for key in FieldKey::ALL {
                    eprintln!("  {}", key);
                }
                process::exit(1);
            });
            assignments.push((key, value.to_string()));
        } else {
            eprintln!("Expected key=value or --session <FILE>, got: {}", arg);
            process::exit(1);
        }
        i += 1;
    }

    let path = session_path.unwrap_or_else(|| {
        eprintln!("Error: --session <FILE> is required");
        process::exit(1);
    });
    if assignments.is_empty() {
        eprintln!("Error: at least one key=value assignment is required");
        process::exit(1);
    }

    let mut session = Session::new();
    if fs::metadata(&path).is_ok() {
        session.restore(&read_document(&path));
    }
    for (key, value) in assignments {
        session.set(key, value);
    }
    write_session(&path, &session);
    eprintln!("Session saved to {}", path);
}

fn cmd_show(args: &[String]) {
    let mut session_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--session" => {
                i += 1;
                session_path = Some(require_value(args, i, "--session"));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = session_path.unwrap_or_else(|| {
        eprintln!("Error: --session <FILE> is required");
        process::exit(1);
    });

    let mut session = Session::new();
    session.restore(&read_document(&path));

    for group in ScenarioGroup::ALL {
        println!("{}", group);
        for key in group.fields() {
            println!("  {:<18} = {:?}", key.name(), session.get(*key));
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output_path = Some(require_value(args, i, "--output"));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let session = generate_sample_session();
    let json = session.snapshot().to_json_string().unwrap_or_else(|e| {
        eprintln!("Error encoding session: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Sample session written to {}", path);
    } else {
        println!("{}", json);
    }
}

/// Fill a session with randomized but plausible values.
fn generate_sample_session() -> Session {
    let mut rng = rand::thread_rng();
    let mut session = Session::new();

    session.set(
        FieldKey::RevenueCny,
        format!("{:.0}", rng.gen_range(1_000_000.0..50_000_000.0)),
    );
    session.set(
        FieldKey::InitialRate,
        format!("{:.4}", rng.gen_range(6.5..7.5)),
    );
    session.set(FieldKey::NewRate, format!("{:.4}", rng.gen_range(6.5..7.5)));
    session.set(
        FieldKey::HedgedPercentage,
        format!("{:.2}", rng.gen_range(0.2..0.9)),
    );
    session.set(
        FieldKey::ForwardRate,
        format!("{:.4}", rng.gen_range(6.5..7.5)),
    );
    session.set(
        FieldKey::DiscountRate,
        format!("{:.3}", rng.gen_range(0.03..0.15)),
    );

    let flow_count = rng.gen_range(3..=8);
    let flows: Vec<String> = (0..flow_count)
        .map(|_| format!("{:.0}", rng.gen_range(-200_000.0..500_000.0)))
        .collect();
    session.set(FieldKey::CashFlows, flows.join(","));

    session.set(
        FieldKey::Investment,
        format!("{:.0}", rng.gen_range(100_000.0..5_000_000.0)),
    );
    session.set(
        FieldKey::PremiumRate,
        format!("{:.3}", rng.gen_range(0.01..0.08)),
    );
    session.set(
        FieldKey::CapitalAmount,
        format!("{:.0}", rng.gen_range(500_000.0..20_000_000.0)),
    );
    session.set(
        FieldKey::DomesticRate,
        format!("{:.3}", rng.gen_range(0.05..0.12)),
    );
    session.set(
        FieldKey::EurobondRate,
        format!("{:.3}", rng.gen_range(0.02..0.08)),
    );

    session
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "impact" => cmd_impact(rest),
        "hedge" => cmd_hedge(rest),
        "npv" => cmd_npv(rest),
        "plot" => cmd_plot(rest),
        "sweep" => cmd_sweep(rest),
        "insurance" => cmd_insurance(rest),
        "savings" => cmd_savings(rest),
        "convert" => cmd_convert(rest),
        "set" => cmd_set(rest),
        "show" => cmd_show(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
