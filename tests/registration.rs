//! Integration tests for `#reg` and `#regInfo`.

mod common;

use common::{TestClient, TestServer};

const ACCEPTED: &str = "Registration accepted. Please keep your uid and pw in a safe and secure location for future reference.";

#[tokio::test]
async fn test_registration_round_trip() {
    let server = TestServer::spawn().await.unwrap();
    let mut a = TestClient::join(&server.address()).await.unwrap();

    a.send("#reg alice p1 a@x.com").await.unwrap();
    assert_eq!(a.recv().await.unwrap(), ACCEPTED);

    a.send("#reg alice other z@x.com").await.unwrap();
    let reply = a.recv().await.unwrap();
    assert_eq!(
        reply,
        "alice has already been used by another user. Please choose another uid."
    );

    a.send("#reg alicia p2 a@x.com").await.unwrap();
    let reply = a.recv().await.unwrap();
    assert_eq!(
        reply,
        "a@x.com has already been used by another user. Please choose another email or request to send forgotten uid and/or pw."
    );

    assert_eq!(server.server.hub().directory.len(), 1);
}

#[tokio::test]
async fn test_reg_usage() {
    let server = TestServer::spawn().await.unwrap();
    let mut a = TestClient::join(&server.address()).await.unwrap();

    a.send("#reg alice p1").await.unwrap();
    assert_eq!(a.recv().await.unwrap(), "usage: #reg <uid> <pw> <email>");

    a.send("#reg alice p1 a@x.com extra").await.unwrap();
    assert_eq!(a.recv().await.unwrap(), "usage: #reg <uid> <pw> <email>");

    assert!(server.server.hub().directory.is_empty());
}

#[tokio::test]
async fn test_reg_info_both_outcomes() {
    let server = TestServer::spawn().await.unwrap();
    let mut a = TestClient::join(&server.address()).await.unwrap();
    a.send("#reg alice p1 a@x.com").await.unwrap();
    a.recv().await.unwrap();

    a.send("#regInfo a@x.com").await.unwrap();
    assert_eq!(
        a.recv().await.unwrap(),
        "An email will be sent to the email address a@x.com giving the uid and pw associated with that account."
    );

    a.send("#reginfo nobody@x.com").await.unwrap();
    let reply = a.recv().await.unwrap();
    assert!(reply.starts_with("Sorry, nobody@x.com does not exist in our records."));
}

#[tokio::test]
async fn test_concurrent_registrations_keep_uid_unique() {
    let server = TestServer::spawn().await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..8 {
        let address = server.address();
        tasks.push(tokio::spawn(async move {
            let mut client = TestClient::connect(&address).await.unwrap();
            client
                .send(&format!("#reg shared pw{i} user{i}@x.com"))
                .await
                .unwrap();
            client
                .recv_until(|line| line.starts_with("Registration") || line.contains("already"))
                .await
                .unwrap()
                .pop()
                .unwrap()
        }));
    }

    let mut accepted = 0;
    for task in tasks {
        if task.await.unwrap() == ACCEPTED {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(server.server.hub().directory.len(), 1);
}
