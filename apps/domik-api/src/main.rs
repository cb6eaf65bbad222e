use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = domik_api::Args::parse();
	domik_api::run(args).await
}
