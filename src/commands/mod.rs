use crate::catalog::Listing;
use crate::table::render_listing;

pub mod config;
mod download;
mod list;

pub use download::download;
pub use list::list;

fn print_summary(listing: &Listing) {
    if listing.fetched {
        println!("Found {} releases", listing.snapshot.len());
    }
}

fn print_listing(listing: &Listing) {
    print_summary(listing);
    print!("{}", render_listing(listing.snapshot));
}
