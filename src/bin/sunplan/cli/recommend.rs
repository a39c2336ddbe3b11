use std::io::{self, Write};

use sunplan::{
    core::{DEFAULT_AUTONOMY_DAYS, Engine, Recommendation, Requirement},
    quantity::KilowattHours,
};

use crate::{
    cli::{RecommendArgs, parse_budget, prompt::Prompter},
    prelude::*,
    tables::{
        build_components_table,
        build_cost_table,
        build_requirement_table,
        build_verdict_table,
    },
};

#[instrument(skip_all)]
pub fn recommend(args: &RecommendArgs) -> Result {
    let catalog = args.catalog.load()?;
    info!(n_components = catalog.len(), "loaded the catalog");

    let requirement = match args.monthly_consumption {
        Some(monthly_consumption) => Requirement::builder()
            .monthly_consumption(monthly_consumption)
            .maybe_budget(args.budget()?)
            .maybe_autonomy_days(args.autonomy_days)
            .build(),
        None => ask_requirement(&mut Prompter::new(io::stdin().lock(), io::stderr()))?,
    };

    let recommendation = Engine::builder()
        .catalog(&catalog)
        .assumptions(args.assumptions())
        .build()
        .recommend(&requirement)
        .context("failed to build a recommendation")?;

    if args.json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &recommendation)?;
        writeln!(stdout)?;
    } else {
        print_report(&recommendation);
    }
    Ok(())
}

fn ask_requirement<R: io::BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Requirement> {
    let monthly_consumption: KilowattHours =
        prompter.ask("Average monthly consumption, kWh: ")?;
    let budget = prompter.ask_optional_with("Budget in naira (empty for none): ", |text| {
        parse_budget(text.parse()?)
    })?;
    let autonomy_days = prompter
        .ask_or(&format!("Days of autonomy [{DEFAULT_AUTONOMY_DAYS}]: "), DEFAULT_AUTONOMY_DAYS)?;
    Ok(Requirement::builder()
        .monthly_consumption(monthly_consumption)
        .maybe_budget(budget)
        .autonomy_days(autonomy_days)
        .build())
}

fn print_report(recommendation: &Recommendation) {
    println!("{}", build_requirement_table(recommendation));
    println!("{}", build_components_table(recommendation));
    println!("{}", build_cost_table(recommendation));
    if let Some(table) = build_verdict_table(recommendation) {
        println!("{table}");
    }
}
