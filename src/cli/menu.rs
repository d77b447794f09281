use std::io::{self, BufRead, Write};

use tracing::debug;

use super::render;
use crate::{
    catalog::Catalog,
    error::{CatalogError, ErrorExt},
};

/// Продолжать ли работу меню после шага.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Subscribe,
    Unsubscribe,
}

/// Интерактивное меню поверх каталога.
///
/// Ввод и вывод передаются снаружи, поэтому меню можно прогнать в тестах
/// на `Cursor` и `Vec<u8>`. Конец ввода равносилен выбору "Exit".
pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        catalog: &'a Catalog,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Основной цикл меню. Возвращается после выбора "Exit" или конца ввода.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;
        loop {
            self.main_menu()?;
            let Some(choice) = self.prompt("Choose an option (1-6): ")? else {
                break;
            };
            debug!(choice = choice.as_str(), "Main menu choice");
            let flow = match choice.as_str() {
                "1" => self.change_subscription(Action::Subscribe)?,
                "2" => self.change_subscription(Action::Unsubscribe)?,
                "3" => self.publish()?,
                "4" => self.show_subscriptions()?,
                "5" => self.show_counts()?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(self.output, "❌ Invalid choice. Please select 1-6.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "\n👋 Goodbye! Thanks for trying the Observer pattern!")?;
        self.output.flush()
    }

    fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "🎯 Welcome to the Observer Pattern Magazine System!")?;
        writeln!(
            self.output,
            "This demonstrates how the Observer pattern works in real-time."
        )?;
        writeln!(self.output, "\nYou can:")?;
        writeln!(self.output, "- Subscribe readers and libraries to magazines")?;
        writeln!(self.output, "- Publish new issues and see who gets notified")?;
        writeln!(self.output, "- Unsubscribe and see the changes")
    }

    fn main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        render::rule(&mut self.output, render::RULE_WIDE)?;
        writeln!(self.output, "🎯 MAGAZINE SUBSCRIPTION SYSTEM")?;
        render::rule(&mut self.output, render::RULE_WIDE)?;
        writeln!(self.output, "1. Subscribe someone to a magazine")?;
        writeln!(self.output, "2. Unsubscribe someone from a magazine")?;
        writeln!(self.output, "3. Publish new magazine issue")?;
        writeln!(self.output, "4. Show all subscribers")?;
        writeln!(self.output, "5. Show subscriber counts")?;
        writeln!(self.output, "6. Exit")?;
        render::rule(&mut self.output, render::RULE_WIDE)
    }

    /// Подписка или отписка: сначала подписчик, затем издание.
    fn change_subscription(
        &mut self,
        action: Action,
    ) -> io::Result<Flow> {
        let header = match action {
            Action::Subscribe => "WHO DO YOU WANT TO SUBSCRIBE?",
            Action::Unsubscribe => "WHO DO YOU WANT TO UNSUBSCRIBE?",
        };
        writeln!(self.output, "\n--- {header} ---")?;
        for (i, subscriber) in self.catalog.subscribers().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, subscriber.name())?;
        }
        let prompt = format!("Choose subscriber (1-{}): ", self.catalog.subscribers().len());
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(subscriber_no) = self.choice(&line, |c, n| c.subscriber(n).map(|_| ()))? else {
            return Ok(Flow::Continue);
        };

        let verb = match action {
            Action::Subscribe => "SUBSCRIBE",
            Action::Unsubscribe => "UNSUBSCRIBE",
        };
        writeln!(self.output, "\n--- CHOOSE MAGAZINE TO {verb} ---")?;
        self.list_magazines(false)?;
        let prompt = self.magazine_prompt();
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(magazine_no) = self.choice(&line, |c, n| c.magazine(n).map(|_| ()))? else {
            return Ok(Flow::Continue);
        };

        let catalog = self.catalog;
        let names = catalog.subscriber(subscriber_no).and_then(|subscriber| {
            let magazine = catalog.magazine(magazine_no)?;
            Ok((subscriber.name(), magazine.name()))
        });
        let (subscriber, magazine) = match names {
            Ok(names) => names,
            Err(err) => {
                self.failure(&err)?;
                return Ok(Flow::Continue);
            }
        };
        match action {
            Action::Subscribe => match catalog.subscribe(subscriber_no, magazine_no) {
                Ok(outcome) => render::register(&mut self.output, outcome, subscriber, magazine)?,
                Err(err) => self.failure(&err)?,
            },
            Action::Unsubscribe => match catalog.unsubscribe(subscriber_no, magazine_no) {
                Ok(outcome) => {
                    render::unregister(&mut self.output, outcome, subscriber, magazine)?
                }
                Err(err) => self.failure(&err)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn publish(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- WHICH MAGAZINE WANTS TO PUBLISH? ---")?;
        self.list_magazines(true)?;
        let prompt = self.magazine_prompt();
        let Some(line) = self.prompt(&prompt)? else {
            return Ok(Flow::Exit);
        };
        let Some(magazine_no) = self.choice(&line, |c, n| c.magazine(n).map(|_| ()))? else {
            return Ok(Flow::Continue);
        };
        let Some(title) = self.prompt("Enter the issue title: ")? else {
            return Ok(Flow::Exit);
        };

        match self.catalog.publish(magazine_no, &title) {
            Ok(report) => render::report(&mut self.output, &report)?,
            Err(err) => writeln!(
                self.output,
                "❌ Publishing failed: {}",
                err.client_message()
            )?,
        }
        Ok(Flow::Continue)
    }

    fn show_subscriptions(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        render::rule(&mut self.output, render::RULE_NARROW)?;
        writeln!(self.output, "📋 ALL CURRENT SUBSCRIPTIONS")?;
        render::rule(&mut self.output, render::RULE_NARROW)?;
        for magazine in self.catalog.magazines() {
            render::subscriptions(&mut self.output, magazine)?;
        }
        Ok(Flow::Continue)
    }

    fn show_counts(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        render::rule(&mut self.output, render::RULE_NARROW)?;
        writeln!(self.output, "📊 SUBSCRIBER STATISTICS")?;
        render::rule(&mut self.output, render::RULE_NARROW)?;
        for magazine in self.catalog.magazines() {
            render::count(&mut self.output, magazine)?;
        }
        Ok(Flow::Continue)
    }

    fn list_magazines(
        &mut self,
        with_counts: bool,
    ) -> io::Result<()> {
        for (i, magazine) in self.catalog.magazines().iter().enumerate() {
            if with_counts {
                writeln!(
                    self.output,
                    "{}. {} ({} subscribers)",
                    i + 1,
                    magazine.name(),
                    magazine.count()
                )?;
            } else {
                writeln!(self.output, "{}. {}", i + 1, magazine.name())?;
            }
        }
        Ok(())
    }

    fn magazine_prompt(&self) -> String {
        format!("Choose magazine (1-{}): ", self.catalog.magazines().len())
    }

    /// Разбирает номер и проверяет его через `lookup`.
    ///
    /// При неверном вводе печатает сообщение и возвращает `None`.
    fn choice(
        &mut self,
        line: &str,
        lookup: impl Fn(&Catalog, usize) -> Result<(), CatalogError>,
    ) -> io::Result<Option<usize>> {
        let Ok(number) = line.parse::<usize>() else {
            writeln!(self.output, "❌ Invalid choice.")?;
            return Ok(None);
        };
        match lookup(self.catalog, number) {
            Ok(()) => Ok(Some(number)),
            Err(err) => {
                writeln!(self.output, "❌ Invalid choice. {}", err.client_message())?;
                Ok(None)
            }
        }
    }

    fn failure(
        &mut self,
        err: &CatalogError,
    ) -> io::Result<()> {
        writeln!(self.output, "❌ {}", err.client_message())
    }

    /// Печатает приглашение и читает строку. `None` означает конец ввода.
    fn prompt(
        &mut self,
        text: &str,
    ) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
