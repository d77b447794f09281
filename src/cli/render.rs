//! Текстовый вывод результатов операций для меню и демо.

use std::io::{self, Write};

use crate::pubsub::{DeliveryReport, Magazine, RegisterOutcome, UnregisterOutcome};

pub(crate) const RULE_WIDE: usize = 50;
pub(crate) const RULE_NARROW: usize = 40;

pub(crate) fn rule<W: Write>(
    out: &mut W,
    width: usize,
) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(width))
}

pub(crate) fn register<W: Write>(
    out: &mut W,
    outcome: RegisterOutcome,
    subscriber: &str,
    magazine: &str,
) -> io::Result<()> {
    match outcome {
        RegisterOutcome::Subscribed => writeln!(out, "✅ {subscriber} subscribed to {magazine}"),
        RegisterOutcome::AlreadySubscribed => {
            writeln!(out, "⚠️  {subscriber} is already subscribed to {magazine}")
        }
    }
}

pub(crate) fn unregister<W: Write>(
    out: &mut W,
    outcome: UnregisterOutcome,
    subscriber: &str,
    magazine: &str,
) -> io::Result<()> {
    match outcome {
        UnregisterOutcome::Unsubscribed => {
            writeln!(out, "❌ {subscriber} unsubscribed from {magazine}")
        }
        UnregisterOutcome::NotSubscribed => {
            writeln!(out, "⚠️  {subscriber} is not subscribed to {magazine}")
        }
    }
}

/// Печатает итог публикации: кто получил выпуск и на ком доставка упала.
pub(crate) fn report<W: Write>(
    out: &mut W,
    report: &DeliveryReport,
) -> io::Result<()> {
    writeln!(out, "\n📢 {} published: \"{}\"", report.magazine, report.issue)?;
    writeln!(out, "Notifying {} subscribers...", report.attempted())?;
    for name in &report.delivered {
        writeln!(out, "   ✉️  {name}")?;
    }
    for failed in &report.failed {
        writeln!(out, "❌ Failed to notify {}: {}", failed.subscriber, failed.reason)?;
    }
    Ok(())
}

pub(crate) fn subscriptions<W: Write>(
    out: &mut W,
    magazine: &Magazine,
) -> io::Result<()> {
    writeln!(out, "\n📖 {}:", magazine.name())?;
    let names = magazine.names();
    if names.is_empty() {
        return writeln!(out, "   No subscribers yet");
    }
    for name in names {
        writeln!(out, "   - {name}")?;
    }
    Ok(())
}

pub(crate) fn count<W: Write>(
    out: &mut W,
    magazine: &Magazine,
) -> io::Result<()> {
    writeln!(out, "📖 {}: {} subscribers", magazine.name(), magazine.count())
}
