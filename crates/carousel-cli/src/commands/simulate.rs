use anyhow::Result;
use serde::Serialize;

use carousel_core::{Affordances, AppConfig, Carousel, CarouselState, Request};

use super::DeckArgs;

#[derive(Serialize)]
struct Step<'a> {
    step: String,
    state: &'a CarouselState,
    affordances: Affordances,
    announcement: String,
}

pub fn run(config: &AppConfig, args: &DeckArgs, steps: &[String], json: bool) -> Result<()> {
    // Reject bad input before touching any state
    let requests = steps
        .iter()
        .map(|s| s.parse::<Request>())
        .collect::<carousel_core::Result<Vec<_>>>()?;

    let cards = args.load_deck()?.into_cards();
    let mut carousel = Carousel::new(cards, args.carousel_config(config)?)?;

    let mut lines = Vec::with_capacity(requests.len() + 1);
    lines.push(render(&carousel, "init", json)?);
    for request in requests {
        carousel.navigate(request);
        lines.push(render(&carousel, &request.to_string(), json)?);
    }

    if json {
        println!("[{}]", lines.join(",\n"));
    } else {
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}

fn render<T: carousel_core::Tile>(
    carousel: &Carousel<T>,
    step: &str,
    json: bool,
) -> Result<String> {
    let state = carousel.state();
    let affordances = carousel.affordances();

    if json {
        let step = Step {
            step: step.to_string(),
            state,
            affordances,
            announcement: carousel.status().to_string(),
        };
        return Ok(serde_json::to_string(&step)?);
    }

    let tile = state
        .cur_tile
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    Ok(format!(
        "{:<8} index={:<3} frame={}/{} cur_tile={:<3} window={}..{} prev:{} next:{}",
        step,
        state.index,
        state.frame_number,
        state.frame_count,
        tile,
        state.cur_frame.start,
        state.cur_frame.end(),
        if affordances.prev_disabled { "off" } else { "on" },
        if affordances.next_disabled { "off" } else { "on" },
    ))
}
