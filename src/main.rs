use anyhow::Context;
use clap::Parser;
use small_catalog::adapters::{ConsoleNotifier, PriceDropPolicy, TracingNotifier};
use small_catalog::domain::ports::Notifier;
use small_catalog::utils::{logger, validation::Validate};
use small_catalog::{Catalog, CatalogError, CatalogSettings, CliConfig, Price, PriceChange};

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("❌ {:#}", e);
        match e.downcast_ref::<CatalogError>() {
            Some(catalog_error) => {
                eprintln!("❌ {}", catalog_error.user_friendly_message());
                eprintln!("💡 {}", catalog_error.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let settings = CatalogSettings::resolve(cli)?;
    logger::init_logger(settings.verbose, settings.json_logs);

    tracing::info!("Starting small-catalog");
    tracing::debug!("Settings: {:?}", settings);

    settings.validate()?;

    let mut catalog = Catalog::from_path(&settings.data_path)
        .with_context(|| format!("failed to load catalog '{}'", settings.data_path))?;

    let mut policy = PriceDropPolicy::interactive(settings.price_drops);
    // JSON log consumers get the notices in the log stream instead of stdout
    let notifier: Box<dyn Notifier> = if settings.json_logs {
        Box::new(TracingNotifier)
    } else {
        Box::new(ConsoleNotifier)
    };
    for request in &settings.reprice {
        match catalog.reprice(&request.product, request.price, &mut policy, notifier.as_ref()) {
            Ok(PriceChange::Applied) => {
                println!("✅ {}: новая цена {}", request.product, request.price)
            }
            Ok(outcome) => tracing::info!("{}: price unchanged ({:?})", request.product, outcome),
            Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
        }
    }

    for category in catalog.categories() {
        println!("{}", category);
        if !category.product_list().is_empty() {
            println!("{}", category.products_view());
        }
        println!("Средняя цена: {}", Price::decimal(category.average_price()));
        println!();
    }

    let counters = catalog.counters();
    println!("Категорий: {}", counters.category_count());
    println!("Товаров: {}", counters.product_count());

    Ok(())
}
