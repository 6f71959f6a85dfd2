use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::loader::{load_dataset, source_for, DatasetSource};
use crate::models::SortMode;
use crate::query::QueryEngine;
use crate::render::{render_list, render_stats, Page, RenderOptions};

/// User input, one per line of the event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New value of the search box
    Search(String),
    /// New value of the sort control
    Sort(String),
    Reload,
    Quit,
}

impl Event {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument),
            None => (line, ""),
        };

        match command.trim() {
            "search" => Some(Event::Search(argument.to_string())),
            "sort" => Some(Event::Sort(argument.trim().to_string())),
            "reload" => Some(Event::Reload),
            "quit" | "exit" => Some(Event::Quit),
            _ => None,
        }
    }
}

pub struct App {
    source: Box<dyn DatasetSource>,
    engine: QueryEngine,
    page: Page,
    options: RenderOptions,
    max_listings: usize,
    output_path: PathBuf,
}

impl App {
    pub fn new(config: &Config, source: Box<dyn DatasetSource>) -> Self {
        Self {
            source,
            engine: QueryEngine::default(),
            page: Page::new(),
            options: RenderOptions::from(config),
            max_listings: config.max_listings,
            output_path: PathBuf::from(&config.output_path),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config, source_for(config)?))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Load the dataset and render it. A load failure is shown on the page, not returned.
    pub async fn bootstrap(&mut self) -> Result<()> {
        self.page = Page::new();
        self.engine = QueryEngine::default();
        self.page.show_loading(true);
        self.page.hide_error();
        self.write_page().await?;

        match load_dataset(self.source.as_ref(), self.max_listings).await {
            Ok(listings) => {
                info!("Loaded {} listings", listings.len());
                self.engine = QueryEngine::new(listings);
                render_list(&mut self.page, self.engine.view(), &self.options);
                render_stats(&mut self.page, self.engine.view());
            }
            Err(e) => {
                error!("Error loading listings: {}", e);
                self.page.show_error(format!("Failed to load listings: {}", e));
            }
        }

        self.page.show_loading(false);
        self.write_page().await
    }

    pub fn search(&mut self, term: &str) {
        let view = self.engine.search(term);
        info!("Search {:?}: {} listings", term, view.len());
        render_list(&mut self.page, view, &self.options);
        render_stats(&mut self.page, view);
        self.page.search_term = term.to_string();
    }

    /// Stats do not depend on order, so only the list is redrawn.
    pub fn sort(&mut self, value: &str) {
        let mode = SortMode::from_key(value);
        let view = self.engine.sort(mode);
        info!("Sort by {}: {} listings", mode, view.len());
        render_list(&mut self.page, view, &self.options);
        self.page.sort_value = value.to_string();
    }

    /// Apply one event and rewrite the page. Returns false once the session should end.
    pub async fn handle(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Search(term) => self.search(&term),
            Event::Sort(value) => self.sort(&value),
            Event::Reload => return self.bootstrap().await.map(|_| true),
            Event::Quit => return Ok(false),
        }

        self.write_page().await?;
        Ok(true)
    }

    /// Process events line by line until the input ends or asks to quit.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            if line.trim().is_empty() {
                continue;
            }

            match Event::parse(&line) {
                Some(event) => {
                    if !self.handle(event).await? {
                        break;
                    }
                }
                None => warn!("Ignoring unknown command: {}", line),
            }
        }

        Ok(())
    }

    async fn write_page(&self) -> Result<()> {
        tokio::fs::write(&self.output_path, self.page.to_html())
            .await
            .with_context(|| format!("Failed to write {}", self.output_path.display()))?;
        debug!("Wrote {} cards to {}", self.page.card_count, self.output_path.display());
        Ok(())
    }
}
