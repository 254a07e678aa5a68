use super::{reply::Outcome, validate, AppState};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method},
    response::Response,
};
use chrono::Utc;
use std::sync::Arc;

pub async fn handle(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return state.cors.options(&headers);
    }

    let outcome = if method != Method::POST {
        log::info!("rejected {} request", method);
        Outcome::MethodNotAllowed
    } else {
        match body {
            Ok(body) => submit(&state, &headers, &body).await,
            Err(rejection) => {
                log::info!("unreadable body: {}", rejection);
                Outcome::Unreadable(rejection)
            }
        }
    };

    outcome.into_response(&state.cors)
}

async fn submit(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Outcome {
    let submission = match validate::submission(headers, body) {
        Ok(submission) => submission,
        Err(rejection) => {
            log::info!("rejected submission: {}", rejection);
            return Outcome::Rejected(rejection);
        }
    };

    let verification = state.verifier.verify(&submission.recaptcha.token).await;
    if !verification.success {
        log::info!("reCAPTCHA rejected: {:?}", verification.errors);
        return Outcome::Unverified(verification);
    }
    log::debug!("reCAPTCHA verified");

    let details = &submission.details;
    let review = match state.formatter.format(details, Utc::now()) {
        Ok(review) => review,
        Err(err) => {
            log::error!("cannot render review: {}", err);
            return err.into();
        }
    };
    log::debug!("formatted {:?}", review.title);

    match state.publisher.publish(&details.course_slug(), &review).await {
        Ok(url) => {
            log::info!("published review for {} at {}", details.course, url);
            Outcome::Created(url)
        }
        Err(err) => {
            log::error!("cannot publish review for {}: {}", details.course, err);
            err.into()
        }
    }
}
