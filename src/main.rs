use sampler_signup::{config::get_or_init_config, web, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        sampler_signup::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        sampler_signup::init_dbg_tracing();
    }

    let config = get_or_init_config().clone();
    let app = App::build_from_config(config).await?;

    web::serve(app).await?;

    Ok(())
}
