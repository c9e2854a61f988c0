//! `shelfwise ask` — answer a single question and exit.

use shelfwise_core::query::Query;

pub async fn run(member_identifier: &str, question: &str) -> anyhow::Result<()> {
    let runtime = super::build_runtime()?;

    let member = runtime.members.resolve(member_identifier);
    let query = Query::new(member, question);

    let reply = runtime
        .assistant
        .handle(&query)
        .await
        .map_err(|e| anyhow::anyhow!("The assistant is temporarily unavailable: {e}"))?;

    println!("{}", reply.text);
    Ok(())
}
