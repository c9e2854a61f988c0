//! `shelfwise chat` — interactive terminal session.
//!
//! Reads questions from stdin, one per line. A provider failure is
//! reported and the loop keeps going; each query is independent.

use shelfwise_core::query::Query;
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};

pub async fn run(member_identifier: &str) -> anyhow::Result<()> {
    let runtime = super::build_runtime()?;
    let member = runtime.members.resolve(member_identifier);

    println!();
    println!("  Shelfwise — interactive session");
    println!();
    println!("  Provider:  {}", runtime.config.provider.name);
    println!("  Model:     {}", runtime.config.provider.model);
    println!("  Member:    {} ({})", member.name, member.member_id);
    println!();
    println!("  {}", runtime.config.persona.greeting(&member));
    println!("  Type your question and press Enter. Type 'exit' to quit.");
    println!();

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        let query = Query::new(member.clone(), line);
        match runtime.assistant.handle(&query).await {
            Ok(reply) => {
                println!();
                for text_line in reply.text.lines() {
                    println!("  Assistant > {text_line}");
                }
                println!();
            }
            Err(e) => {
                eprintln!("  [Error] The assistant is temporarily unavailable: {e}");
                eprintln!("  Please try again.");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    Ok(())
}
