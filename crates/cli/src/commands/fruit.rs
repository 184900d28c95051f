//! Fruit Commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::client::FruitsClient;
use crate::output::{print_item, print_list, print_message, print_success, OutputFormat, TableDisplay};
use orchard_common::Fruit;

#[derive(Subcommand)]
pub enum FruitCommands {
    /// List all fruits
    List,

    /// Get fruit details
    Get {
        /// Fruit ID
        id: String,
    },

    /// Create a new fruit
    Create {
        /// Fruit name
        #[arg(short, long)]
        name: String,
    },

    /// Rename a fruit
    Update {
        /// Fruit ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: String,
    },

    /// Remove a fruit
    Remove {
        /// Fruit ID
        id: String,
    },

    /// Remove all fruits
    Clear,
}

/// Fruit display wrapper for serialization
#[derive(Serialize)]
pub struct FruitDisplay {
    pub id: String,
    pub name: String,
}

impl From<Fruit> for FruitDisplay {
    fn from(fruit: Fruit) -> Self {
        Self {
            id: fruit.id,
            name: fruit.name,
        }
    }
}

impl TableDisplay for FruitDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

pub async fn execute(cmd: FruitCommands, client: FruitsClient, format: OutputFormat) -> Result<()> {
    match cmd {
        FruitCommands::List => {
            let fruits = client.get_fruits().await?;
            let displays: Vec<FruitDisplay> = fruits.into_iter().map(FruitDisplay::from).collect();
            print_list(&displays, format);
        }

        FruitCommands::Get { id } => match client.get_fruit(&id).await? {
            Some(fruit) => print_item(&FruitDisplay::from(fruit), format),
            None => print_message(&format!("No fruit with id '{}'", id), format),
        },

        FruitCommands::Create { name } => {
            let fruit = client.create_fruit(&name).await?;
            let display = FruitDisplay::from(fruit);
            print_success(&format!("Fruit '{}' created", display.name));
            print_item(&display, format);
        }

        FruitCommands::Update { id, name } => match client.update_fruit(&id, &name).await? {
            Some(fruit) => {
                print_success(&format!("Fruit '{}' renamed to '{}'", fruit.id, fruit.name));
                print_item(&FruitDisplay::from(fruit), format);
            }
            None => print_message(&format!("No fruit with id '{}'", id), format),
        },

        FruitCommands::Remove { id } => match client.remove_fruit(&id).await? {
            Some(fruit) => print_success(&format!("Fruit '{}' removed", fruit.name)),
            None => print_message(&format!("No fruit with id '{}'", id), format),
        },

        FruitCommands::Clear => {
            client.remove_all_fruits().await?;
            print_success("All fruits removed");
        }
    }

    Ok(())
}
