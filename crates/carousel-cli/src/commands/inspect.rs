use anyhow::Result;

use carousel_core::{AppConfig, Carousel};

use super::DeckArgs;

pub fn run(config: &AppConfig, args: &DeckArgs) -> Result<()> {
    let carousel = Carousel::new(args.load_deck()?.into_cards(), args.carousel_config(config)?)?;
    let state = carousel.state();

    if state.is_inert() {
        println!("No cards; every control is disabled.");
        return Ok(());
    }

    println!(
        "{} cards, {} per frame, stepping by {}\n",
        state.cur_tile_length,
        state.increment,
        state.mode.as_str()
    );

    for (n, window) in carousel.frames().iter().enumerate() {
        let short = if window.len < state.increment { "  (short)" } else { "" };
        println!(
            "  frame {:>3}: cards {:>3}-{:<3} [{} tiles]{}",
            n + 1,
            window.start + 1,
            window.end(),
            window.len,
            short
        );
        for card in &carousel.tiles()[window.range()] {
            let label = if card.filler { "(filler)" } else { card.title.as_str() };
            println!("      {}", label);
        }
    }

    let affordances = carousel.affordances();
    println!();
    println!("  frames:      {}", state.frame_count);
    println!("  tile delta:  {}", state.tile_delta);
    println!("  max index:   {}", state.max_index());
    println!(
        "  controls:    prev {}, next {}",
        if affordances.prev_disabled { "disabled" } else { "enabled" },
        if affordances.next_disabled { "disabled" } else { "enabled" }
    );

    Ok(())
}
