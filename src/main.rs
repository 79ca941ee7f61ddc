use std::io;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use typed_store::{
    DataStorage, Fruit, GroceriesListStorage, GroceryItem, GroceryKey, LotteryKey, Singleton,
    StoreKey, StoreResult, Vegetable, WinningLotteryNumbersStorage,
};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn describe(items: &[GroceryItem]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn groceries() -> StoreResult<()> {
    let banana = Fruit::new("Banana", 0.90, 8);
    let kiwi = Fruit::new("Kiwi", 1.30, 8);
    let cucumber = Vegetable::new("Cucumber", 0.40, false);

    let store = GroceriesListStorage::shared();
    store.set(GroceryKey::Fruits, vec![banana.into(), kiwi.into()]);
    store.set(GroceryKey::Vegetables, vec![cucumber.into()]);

    println!("{}", describe(&store.get(GroceryKey::Fruits).unwrap_or_default()));
    let removed = store.remove_element(GroceryKey::Fruits, 0)?;
    info!(%removed, "removed first fruit");
    println!("{}", describe(&store.get(GroceryKey::Fruits).unwrap_or_default()));
    println!("{}", describe(&store.get(GroceryKey::Vegetables).unwrap_or_default()));

    let inventory = store.storage().to_json()?;
    info!(%inventory, "groceries");
    Ok(())
}

async fn lottery() -> StoreResult<()> {
    let store = WinningLotteryNumbersStorage::shared();
    store.set(
        LotteryKey::WinningNumbers,
        vec![[1, 7, 4], [1, 5, 7], [8, 2, 1]],
    );
    store.set(
        LotteryKey::LosingNumbers,
        vec![[6, 4, 3], [2, 5, 7], [7, 6, 1]],
    );

    // Readers on other tasks see the same instance.
    let readers = LotteryKey::ALL.iter().map(|&key| {
        tokio::spawn(async move {
            let draws = WinningLotteryNumbersStorage::shared().get(key).unwrap_or_default();
            (key, draws.len())
        })
    });
    for (key, count) in futures::future::join_all(readers).await.into_iter().flatten() {
        info!(?key, count, "draws visible from task");
    }

    println!(
        "The losing lottery numbers are : {:?}",
        store.get(LotteryKey::LosingNumbers).unwrap_or_default()
    );
    println!(
        "The winning lottery numbers are : {:?}",
        store.get(LotteryKey::WinningNumbers).unwrap_or_default()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> StoreResult<()> {
    init_logging();
    groceries()?;
    lottery().await?;
    Ok(())
}
