use clap::{Parser, ValueEnum};
use log::info;
use prioheap::{Heap, Order, Result};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OrderArg {
    Min,
    Max,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Min => Order::MinFirst,
            OrderArg::Max => Order::MaxFirst,
        }
    }
}

/// Fills a heap, prints its layout, extracts the top once, and prints it again.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which end of the ordering is extracted first.
    #[arg(short, long, value_enum, default_value = "min")]
    order: OrderArg,

    /// Initial capacity hint.
    #[arg(short, long, default_value_t = 14)]
    capacity: usize,

    /// Values to insert, in order.
    #[arg(allow_negative_numbers = true, default_values_t = vec![1, 2, 3, 4, 7, 5, 11])]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("{:?}", args);

    let mut heap = Heap::new(args.order.into(), args.capacity);
    for &v in args.values.iter() {
        heap.insert(v)?;
    }
    println!("Following insertions we have: \n");
    println!("{}", heap);

    let top = heap.extract_top()?;
    info!("extracted {}", top);
    println!("Following deletion we have: \n");
    println!("{}", heap);
    Ok(())
}
