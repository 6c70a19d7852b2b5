//! # Console Menu
//!
//! Interactive front end for the product actor. Reads from any [`BufRead`] and writes to any
//! [`Write`], so the whole menu can be driven from a byte slice in tests.
//!
//! End of input at any prompt ends the session like the exit option does.

use crate::clients::ProductClient;
use crate::model::{ProductCreate, ProductKind};
use std::io::{self, BufRead, Write};
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddElectronic,
    AddFood,
    Find,
    UpdatePrice,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddElectronic),
            "2" => Some(MenuChoice::AddFood),
            "3" => Some(MenuChoice::Find),
            "4" => Some(MenuChoice::UpdatePrice),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::List),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    client: ProductClient,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// With `clear_screen` set, the terminal is cleared before every menu and each action
    /// waits for enter before returning to it.
    pub fn new(client: ProductClient, input: R, output: W, clear_screen: bool) -> Self {
        Self {
            client,
            input,
            output,
            clear_screen,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Only I/O failures on the console itself are returned; every product error is
    /// printed and the loop continues.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            if self.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            self.show_menu()?;

            let Some(option) = self.prompt("Select an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&option) {
                Some(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice).await?
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid option. Please select a valid option (1-7)"
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
            if self.clear_screen && self.prompt("Press enter to continue...")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddElectronic | MenuChoice::AddFood => self.add_product(choice).await,
            MenuChoice::Find => self.find_product().await,
            MenuChoice::UpdatePrice => self.update_price().await,
            MenuChoice::Delete => self.delete_product().await,
            MenuChoice::List => self.list_products().await,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "========== Product Management Menu ==========")?;
        writeln!(self.output, "1. Add Electronic Product")?;
        writeln!(self.output, "2. Add Food Product")?;
        writeln!(self.output, "3. Find Product by ID")?;
        writeln!(self.output, "4. Update Product Price")?;
        writeln!(self.output, "5. Delete Product by ID")?;
        writeln!(self.output, "6. Show All Products")?;
        writeln!(self.output, "7. Exit")?;
        writeln!(self.output, "=============================================")?;
        writeln!(self.output)
    }

    /// Prints `label` and reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn add_product(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter product ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Enter product name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Enter product price: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(price) = price.parse::<f64>() else {
            writeln!(self.output, "Error: '{price}' is not a valid price")?;
            return Ok(Flow::Continue);
        };
        let Some(quantity) = self.prompt("Enter stock quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(quantity) = quantity.parse::<i64>() else {
            writeln!(self.output, "Error: '{quantity}' is not a valid quantity")?;
            return Ok(Flow::Continue);
        };

        let kind = if choice == MenuChoice::AddElectronic {
            let Some(warranty) = self.prompt("Enter product warranty: ")? else {
                return Ok(Flow::Exit);
            };
            ProductKind::Electronic { warranty }
        } else {
            let Some(expiration_date) = self.prompt("Enter expiration date: ")? else {
                return Ok(Flow::Exit);
            };
            ProductKind::Food { expiration_date }
        };

        let params = ProductCreate {
            id,
            name: name.clone(),
            price,
            quantity,
            kind,
        };
        match self.client.create_product(params).await {
            Ok(_) => writeln!(self.output, "Product {name} created successfully.")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn find_product(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter the ID of the product to find: ")? else {
            return Ok(Flow::Exit);
        };
        match self.client.find_product(id).await {
            Ok(product) => writeln!(self.output, "PRODUCT FOUND: {product}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn update_price(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter the ID of the product to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Enter the new price: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(price) = price.parse::<f64>() else {
            writeln!(self.output, "Error: '{price}' is not a valid price")?;
            return Ok(Flow::Continue);
        };

        match self.client.update_price(id.clone(), price).await {
            Ok(_) => writeln!(self.output, "Price updated for product ID: {id}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn delete_product(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter the ID of the product to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.client.delete_product(id.clone()).await {
            Ok(()) => writeln!(self.output, "Product ID: {id} deleted successfully")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    async fn list_products(&mut self) -> io::Result<Flow> {
        let products = match self.client.list_products().await {
            Ok(products) => products,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "=============== FULL PRODUCT LIST ===============")?;
        writeln!(self.output)?;
        if products.is_empty() {
            writeln!(self.output, "No products stored.")?;
        }
        for product in &products {
            writeln!(self.output, "{}", product.summary())?;
        }
        writeln!(self.output, "=================================================")?;
        Ok(Flow::Continue)
    }
}
