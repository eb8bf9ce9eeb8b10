use crate::error::ClientError;
use async_trait::async_trait;
use configuration::NewsConfig;
use core_types::Article;
use futures::future::join_all;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::time::Duration;

/// A source of news articles relevant to a fund.
///
/// The live implementation reads RSS feeds; tests substitute a fixed list.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the articles that mention `fund_name`, in feed order.
    async fn fetch_articles(&self, fund_name: &str) -> Result<Vec<Article>, ClientError>;
}

/// Reads a fixed set of RSS 2.0 / Atom feeds over HTTP.
#[derive(Clone)]
pub struct RssNewsClient {
    client: reqwest::Client,
    feeds: Vec<String>,
}

impl RssNewsClient {
    pub fn new(config: &NewsConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fundlens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.feeds.clone()))
    }

    /// Uses an already configured HTTP client.
    pub fn with_client(client: reqwest::Client, feeds: Vec<String>) -> Self {
        Self { client, feeds }
    }

    pub fn feeds(&self) -> &[String] {
        &self.feeds
    }

    async fn fetch_feed(&self, url: &str) -> Result<Vec<Article>, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        parse_feed(&body, url)
    }
}

#[async_trait]
impl NewsSource for RssNewsClient {
    async fn fetch_articles(&self, fund_name: &str) -> Result<Vec<Article>, ClientError> {
        let results = join_all(self.feeds.iter().map(|url| self.fetch_feed(url))).await;

        let mut articles = Vec::new();
        for (url, result) in self.feeds.iter().zip(results) {
            match result {
                Ok(feed) => {
                    tracing::debug!(feed = %url, items = feed.len(), "Fetched feed");
                    articles.extend(filter_for_fund(feed, fund_name));
                }
                Err(e) => tracing::warn!(feed = %url, error = %e, "Skipping feed"),
            }
        }

        tracing::info!(fund = fund_name, articles = articles.len(), "Collected relevant articles");
        Ok(articles)
    }
}

/// Keeps the articles whose title or summary contains any word of the fund
/// name, compared case-insensitively.
pub fn filter_for_fund(articles: Vec<Article>, fund_name: &str) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|article| article.mentions(fund_name))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Summary,
    Link,
}

#[derive(Debug, Default)]
struct PartialArticle {
    title: String,
    summary: String,
    link: Option<String>,
    link_text: String,
}

impl PartialArticle {
    fn push(&mut self, field: Field, text: &str) {
        let target = match field {
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::Link => &mut self.link_text,
        };
        if !target.is_empty() && !text.is_empty() {
            target.push(' ');
        }
        target.push_str(text);
    }

    fn finish(self, source: &str) -> Option<Article> {
        let title = collapse_whitespace(&self.title);
        if title.is_empty() {
            return None;
        }
        let link = self.link.or_else(|| {
            let text = self.link_text.trim();
            (!text.is_empty()).then(|| text.to_string())
        });
        Some(Article {
            title,
            summary: collapse_whitespace(&strip_markup(&self.summary)),
            link,
            source: source.to_string(),
        })
    }
}

/// Parses the `<item>` (RSS 2.0) and `<entry>` (Atom) elements of a feed.
///
/// Items without a title are dropped. Summaries come from `<description>` or
/// `<summary>` with any embedded HTML tags removed. Entities and CDATA
/// sections are decoded; an entity that cannot be resolved leaves that text
/// as written.
///
/// A feed that breaks after at least one complete item keeps the items read
/// so far. It is only an error when nothing usable came before the break.
pub fn parse_feed(xml: &str, source: &str) -> Result<Vec<Article>, ClientError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let feed_error = |reason: String| ClientError::Feed {
        url: source.to_string(),
        reason,
    };

    let mut articles = Vec::new();
    let mut current: Option<PartialArticle> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"item" | b"entry" => {
                    current = Some(PartialArticle::default());
                    field = None;
                }
                b"title" => {
                    field = current
                        .as_ref()
                        .filter(|a| a.title.is_empty())
                        .map(|_| Field::Title);
                }
                b"description" | b"summary" => {
                    field = current
                        .as_ref()
                        .filter(|a| a.summary.is_empty())
                        .map(|_| Field::Summary);
                }
                b"link" => {
                    if let Some(article) = current.as_mut() {
                        match href_of(&e) {
                            Some(href) => {
                                article.link.get_or_insert(href);
                            }
                            None => field = Some(Field::Link),
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"link" {
                    if let (Some(article), Some(href)) = (current.as_mut(), href_of(&e)) {
                        article.link.get_or_insert(href);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(article), Some(f)) = (current.as_mut(), field) {
                    let text = match e.unescape_with(resolve_entity) {
                        Ok(text) => text.into_owned(),
                        Err(err) => {
                            tracing::debug!(feed = source, error = %err, "Keeping undecoded text");
                            String::from_utf8_lossy(&e).into_owned()
                        }
                    };
                    article.push(f, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(article), Some(f)) = (current.as_mut(), field) {
                    let bytes = e.into_inner();
                    article.push(f, String::from_utf8_lossy(&bytes).trim());
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"item" | b"entry" => {
                    if let Some(article) = current.take().and_then(|p| p.finish(source)) {
                        articles.push(article);
                    }
                    field = None;
                }
                b"title" | b"description" | b"summary" | b"link" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                let position = reader.error_position();
                if articles.is_empty() {
                    return Err(feed_error(format!("at byte {position}: {e}")));
                }
                tracing::warn!(
                    feed = source,
                    position,
                    error = %e,
                    kept = articles.len(),
                    "Malformed feed, keeping the items read before the error"
                );
                break;
            }
        }
    }

    Ok(articles)
}

/// XML's predefined entities plus the HTML ones that commonly leak into
/// feed titles and summaries.
fn resolve_entity(entity: &str) -> Option<&'static str> {
    let value = match entity {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        "nbsp" => "\u{a0}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "euro" => "\u{20ac}",
        "pound" => "\u{a3}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        _ => return None,
    };
    Some(value)
}

fn href_of(element: &BytesStart<'_>) -> Option<String> {
    element
        .try_get_attribute("href")
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Drops anything between `<` and `>`; feed summaries often carry HTML.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
