mod review_channel;
mod review_session;
