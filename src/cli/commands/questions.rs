//! Questions command - List the question asked for every attribute

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::SessionArgs,
        output::{print_kv, print_section},
    },
    questions::question_for,
};

#[derive(Parser, Debug)]
#[command(about = "Print the question text for every catalog attribute")]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Also print the catalog as JSON
    #[arg(long)]
    pub dump_catalog: bool,
}

pub fn execute(args: QuestionsArgs) -> Result<()> {
    let app = args.session.load_app()?;
    let catalog = app.catalog();

    print_section(&format!("Questions ({})", args.session.language));
    for attribute in catalog.attributes() {
        print_kv(
            attribute.as_str(),
            &question_for(attribute.as_str(), args.session.language),
        );
    }

    if args.dump_catalog {
        print_section("Catalog");
        println!("{}", catalog.to_json_string()?);
    }
    Ok(())
}
