use anyhow::Result;
use dongnae_core::org::search_orgs;

use crate::data;
use crate::render;

pub async fn run(query: &str) -> Result<()> {
    let orgs = data::load_orgs_or_empty().await;
    let hits = search_orgs(&orgs, query);

    println!("{}", render::render_org_table(&hits));
    Ok(())
}
