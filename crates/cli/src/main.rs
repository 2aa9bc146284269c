use clap::Parser;
use log::debug;
use std::process::ExitCode;

use clivo_cli::arguments::processing::{parse_choice_declaration, parse_step_declaration};
use clivo_cli::arguments::{render, Provider};
use clivo_cli::cli_args::{Args, Command, ParseArgs};
use clivo_cli::prompts::{
    install_interrupt_handler, prompt_number, prompt_options, prompt_text, prompt_workflow,
    StdTerminal, WorkflowStep,
};
use clivo_core::error::Result;
use clivo_core::parsing::parse_arguments;

fn run_parse(args: &ParseArgs) -> Result<()> {
    let request = args.get_request()?;
    debug!(
        "Parsing {} tokens with {} declared options",
        request.tokens.len(),
        request.specs.len()
    );

    let dictionary = parse_arguments(&request)?;
    let rendered = render(&dictionary, args.format)?;

    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();
    if !matches!(args.command, Command::Parse(_)) {
        install_interrupt_handler()?;
    }
    let mut terminal = StdTerminal::new();

    match args.command {
        Command::Parse(parse_args) => run_parse(&parse_args)?,
        Command::Choose { message, choices } => {
            let choices: Vec<_> = choices
                .iter()
                .map(|choice| parse_choice_declaration(choice))
                .collect();
            let choice = prompt_options(&mut terminal, &message, &choices)?;
            println!("{}", choice.name);
        }
        Command::Text { message } => {
            println!("{}", prompt_text(&mut terminal, &message)?);
        }
        Command::Number { message } => {
            println!("{}", prompt_number(&mut terminal, &message)?);
        }
        Command::Workflow { message, steps } => {
            let steps = steps
                .iter()
                .map(|step| parse_step_declaration(step))
                .collect::<Result<Vec<WorkflowStep>>>()?;

            for answer in prompt_workflow(&mut terminal, &message, &steps)? {
                println!("{answer}");
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
