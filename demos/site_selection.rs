//! Example: choosing restaurant sites along a highway.
//!
//! Run with:
//! `cargo run --example site_selection`

use site_dp::{try_solve, SiteSelector};

fn main() {
    let revenues = vec![2, 4, 5, 17, 11, 8, 4, 2];

    for d in 0..4 {
        let selector = SiteSelector::new(d, revenues.clone());
        let selection = selector.run();
        println!(
            "d = {d}: revenue {} from sites {:?}",
            selection.revenue, selection.sites
        );
        if let Err(err) = selection.verify(d, &revenues) {
            eprintln!("invalid selection: {err}");
        }
    }

    // Negative distances are rejected on the validated path.
    match try_solve(-1, &revenues) {
        Ok(selection) => println!("unexpected: {selection:?}"),
        Err(err) => println!("d = -1: {err}"),
    }
}
