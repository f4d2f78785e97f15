use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, Message};
use serenity::http::Http;

use crate::{
    model::crosspost::{CrosspostOutcome, CrosspostRequest},
    service::crosspost::CrosspostService,
};

/// Handle message creation in a channel
///
/// Messages in the videos channel are crossposted. Failures are only logged;
/// nothing is posted back to the channel.
pub async fn handle_message(videos_channel_id: ChannelId, ctx: Context, message: Message) {
    let request = CrosspostRequest::from_message(&message);

    let http: &Http = &ctx.http;
    let crosspost_service = CrosspostService::new(http, videos_channel_id);

    match crosspost_service.crosspost(&request).await {
        Ok(CrosspostOutcome::Published) => {
            tracing::debug!(
                "Crossposted message {} from channel {}",
                request.message_id,
                request.channel_id
            );
        }
        Ok(CrosspostOutcome::Skipped) => {}
        Err(e) => {
            tracing::error!(
                "Error while crossposting message {} in channel {}: {}",
                request.message_id,
                request.channel_id,
                e
            );
        }
    }
}
