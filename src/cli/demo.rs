use std::{io::Write, sync::Arc};

use anyhow::Result;
use tracing::info;

use super::render;
use crate::pubsub::{Library, Magazine, Reader, SharedSubscriber};

/// Неинтерактивная демонстрация: подписка, публикация, отписка, повторная
/// публикация и итоговые счётчики.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "🎯 Observer Pattern Simple Demo\n")?;

    let tech = Magazine::new("Tech Weekly")?;
    let cooking = Magazine::new("Cooking Today")?;

    let john: SharedSubscriber = Arc::new(Reader::new("John")?);
    let alice: SharedSubscriber = Arc::new(Reader::new("Alice")?);
    let city_library: SharedSubscriber = Arc::new(Library::new("City Library")?);

    writeln!(out, "--- Subscribing to magazines ---")?;
    for (magazine, subscriber) in [
        (&tech, &john),
        (&tech, &city_library),
        (&cooking, &alice),
        (&cooking, &city_library),
    ] {
        let outcome = magazine.register(Arc::clone(subscriber));
        render::register(out, outcome, subscriber.name(), magazine.name())?;
    }

    writeln!(out, "\n--- Publishing new issues ---")?;
    render::report(out, &tech.publish("Best AI Tools 2024")?)?;
    render::report(out, &cooking.publish("Quick Dinner Recipes")?)?;

    writeln!(out, "\n--- Alice unsubscribes from cooking ---")?;
    let outcome = cooking.unregister(alice.as_ref());
    render::unregister(out, outcome, alice.name(), cooking.name())?;

    writeln!(out, "\n--- Publishing again ---")?;
    render::report(out, &cooking.publish("Healthy Smoothies")?)?;

    writeln!(out, "\n--- Final counts ---")?;
    for magazine in [&tech, &cooking] {
        writeln!(out, "{}: {} subscribers", magazine.name(), magazine.count())?;
    }
    writeln!(out, "\n✅ Observer pattern working perfectly!")?;

    info!(
        tech = ?tech.stats(),
        cooking = ?cooking.stats(),
        "Demo finished"
    );
    Ok(())
}
