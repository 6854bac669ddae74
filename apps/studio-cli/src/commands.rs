//! Subcommand implementations.
//!
//! Each command returns the lines to print so it can be exercised against
//! `MockStudioApi` without a terminal.

use anyhow::{anyhow, bail, Context};
use chrono::Locale;
use clap::Args;
use heshima_client::{AdminInquiryList, CatalogLoader, InquirySubmission, StudioApi};
use heshima_core::catalog::CATALOG_ERROR_MESSAGE;
use heshima_core::{format_usd, Cart, CartSummary, InquiryDraft, Product, ProductId, SubmissionStatus};
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct InquireArgs {
    /// Service the inquiry is about
    #[arg(long)]
    pub product: i64,

    /// Your name
    #[arg(long)]
    pub name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Project notes
    #[arg(long, default_value = "")]
    pub message: String,

    /// Extra services for the project plan (repeatable)
    #[arg(long = "scope")]
    pub scope: Vec<i64>,
}

/// Loads the catalog and renders the display list.
pub async fn catalog<A: StudioApi>(api: &A) -> Vec<String> {
    let loader = CatalogLoader::new();
    loader.load(api).await;

    let mut lines = Vec::new();
    if let Some(message) = loader.error() {
        lines.push(message);
    }
    if loader.snapshot().is_fallback() {
        lines.push("(standard offerings)".to_string());
    }
    lines.extend(loader.display_list().iter().map(product_line));
    lines
}

/// Builds a project plan from `--product` and `--scope`, then sends one inquiry.
pub async fn inquire<A: StudioApi>(api: &A, args: InquireArgs) -> anyhow::Result<Vec<String>> {
    let loader = CatalogLoader::new();
    loader.load(api).await;
    let products = loader.display_list();

    let mut lines = Vec::new();
    if loader.error().is_some() {
        warn!("Using standard offerings for this inquiry");
        lines.push(CATALOG_ERROR_MESSAGE.to_string());
    }

    let mut cart = Cart::new();
    for id in std::iter::once(args.product).chain(args.scope.iter().copied()) {
        match products.iter().find(|p| p.id == ProductId(id)) {
            Some(product) => {
                cart.add(product);
            }
            None => warn!(product_id = id, "Unknown service, not added to plan"),
        }
    }

    lines.push("Project plan:".to_string());
    lines.extend(
        cart.entries()
            .iter()
            .map(|entry| format!("  {}  {}", entry.name, format_usd(entry.price()))),
    );
    lines.push(CartSummary::from(&cart).total_display);

    let submission = InquirySubmission::with_draft(InquiryDraft::new(
        args.product,
        args.name,
        args.email,
        args.message,
    ));
    submission
        .submit(api, &products)
        .context("inquiry not sent")?
        .await;

    let message = submission
        .message()
        .ok_or_else(|| anyhow!("inquiry finished without a status message"))?;

    match submission.status() {
        SubmissionStatus::Success => {
            if let Some(receipt) = submission.last_receipt() {
                info!(inquiry_id = receipt.id, items = cart.len(), "Inquiry confirmed");
                lines.push(format!("{message} (reference #{})", receipt.id));
            } else {
                lines.push(message);
            }
            Ok(lines)
        }
        _ => bail!(message),
    }
}

/// Loads the admin inquiry list.
pub async fn inquiries<A: StudioApi>(api: &A, locale: Locale) -> anyhow::Result<Vec<String>> {
    let list = AdminInquiryList::new();
    list.load(api).await;

    if let Some(message) = list.error() {
        bail!(message);
    }

    let rows = list.rows(locale);
    if rows.is_empty() {
        return Ok(vec!["No inquiries yet.".to_string()]);
    }

    let mut lines = Vec::new();
    for row in rows {
        lines.push(format!(
            "#{}  {}  {} <{}>  {}",
            row.id, row.created_at, row.customer_name, row.customer_email, row.items_label
        ));
        if !row.notes.is_empty() {
            lines.push(format!("    {}", row.notes));
        }
    }
    Ok(lines)
}

fn product_line(product: &Product) -> String {
    let mut line = format!("{:>4}  {:<16} {:>12}", product.id.get(), product.name, format_usd(product.price()));
    if !product.description.is_empty() {
        line.push_str("  ");
        line.push_str(&product.description);
    }
    line
}
