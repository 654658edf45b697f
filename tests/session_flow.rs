//! End-to-end session tests against a scripted server.
//!
//! Each test spawns the bot binary with a temp config pointing at an
//! in-process listener, then asserts on the exact wire traffic.

mod common;

use common::BotHarness;
use std::time::Instant;

#[tokio::test]
async fn test_registration_join_and_keepalive() {
    let mut bot = BotHarness::spawn().await;

    assert_eq!(bot.expect_line().await, "USER AvicBot 0 * :Avicennasis");
    assert_eq!(bot.expect_line().await, "NICK AvicBot");
    assert_eq!(bot.expect_line().await, "JOIN #chan");

    // Keepalive echoes the probe payload.
    bot.send_line("PING :abc123").await;
    assert_eq!(bot.expect_line().await, "PONG :abc123");

    // A bare probe gets the fallback payload.
    bot.send_line("PING").await;
    assert_eq!(bot.expect_line().await, "PONG :pingis");
}

#[tokio::test]
async fn test_pass_auth_sends_pass_before_registration() {
    let mut bot = BotHarness::spawn_with(
        "channels = [\"#chan\"]\nauth = \"pass\"\nsecret = \"oauth:token\"",
    )
    .await;

    assert_eq!(bot.expect_line().await, "PASS oauth:token");
    assert_eq!(bot.expect_line().await, "USER AvicBot 0 * :Avicennasis");
    assert_eq!(bot.expect_line().await, "NICK AvicBot");
    assert_eq!(bot.expect_line().await, "JOIN #chan");
}

#[tokio::test]
async fn test_identify_auth_sends_identify_after_nick() {
    let mut bot = BotHarness::spawn_with(
        "channels = [\"#chan\"]\nauth = \"identify\"\nsecret = \"hunter2\"",
    )
    .await;

    assert_eq!(bot.expect_line().await, "USER AvicBot 0 * :Avicennasis");
    assert_eq!(bot.expect_line().await, "NICK AvicBot");
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG NickServ :IDENTIFY hunter2"
    );
    assert_eq!(bot.expect_line().await, "JOIN #chan");
}

#[tokio::test]
async fn test_channels_joined_in_configuration_order() {
    let mut bot =
        BotHarness::spawn_with("channels = [\"##first\", \"#second\", \"#third\"]").await;

    assert_eq!(bot.expect_line().await, "USER AvicBot 0 * :Avicennasis");
    assert_eq!(bot.expect_line().await, "NICK AvicBot");
    assert_eq!(bot.expect_line().await, "JOIN ##first");
    assert_eq!(bot.expect_line().await, "JOIN #second");
    assert_eq!(bot.expect_line().await, "JOIN #third");
}

#[tokio::test]
async fn test_command_and_trigger_dispatch() {
    let mut bot = BotHarness::spawn().await;
    bot.drain_registration().await;

    bot.send_line(":alice!a@host PRIVMSG #chan :!lang en?").await;
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :en is English!");

    bot.send_line(":alice!a@host PRIVMSG #chan :!lang zz?").await;
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG #chan :unknown language code: zz"
    );

    bot.send_line(":alice!a@host PRIVMSG #chan :dance AvicBot")
        .await;
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :*AvicBot dances*");

    // A private message is answered to the sender.
    bot.send_line(":alice!a@host PRIVMSG AvicBot :!random").await;
    assert_eq!(bot.expect_line().await, "PRIVMSG alice :7.");
}

#[tokio::test]
async fn test_say_copies_to_master() {
    let mut bot = BotHarness::spawn().await;
    bot.drain_registration().await;

    bot.send_line(":alice!a@host PRIVMSG #chan :!say hello world")
        .await;
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :hello world");
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG Avicennasis :Message sent: hello world"
    );
}

#[tokio::test]
async fn test_malformed_input_does_not_kill_the_session() {
    let mut bot = BotHarness::spawn().await;
    bot.drain_registration().await;

    // Invalid UTF-8, grammar violations, and unmodeled server chatter are
    // all dropped without disturbing later dispatch.
    bot.send_raw(b"\xff\xfe utter garbage\r\n").await;
    bot.send_line("::: not a message").await;
    bot.send_line(":server 421 AvicBot FROB :Unknown command")
        .await;
    bot.send_line(":server NOTICE * :*** Looking up your hostname")
        .await;

    bot.send_line(":alice!a@host PRIVMSG #chan :!say still alive")
        .await;
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :still alive");
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG Avicennasis :Message sent: still alive"
    );
}

#[tokio::test]
async fn test_die_gate_and_shutdown() {
    let mut bot = BotHarness::spawn().await;
    bot.drain_registration().await;

    // Wrong argument: silently ignored. The follow-up command proves the
    // session is still alive and that nothing was emitted in between.
    bot.send_line(":alice!a@host PRIVMSG #chan :!die Impostor")
        .await;
    bot.send_line(":alice!a@host PRIVMSG #chan :!random").await;
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :7.");

    // Exact nick (case-insensitive): farewell, master notice, quit.
    bot.send_line(":alice!a@host PRIVMSG #chan :!die avicbot")
        .await;
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG #chan :Do you wanna build a snowman?"
    );
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG #chan :It doesn't have to be a snowman."
    );
    assert_eq!(bot.expect_line().await, "PRIVMSG #chan :Ok, Bye :(");
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG Avicennasis :I have to leave now :("
    );
    assert_eq!(bot.expect_line().await, "QUIT :I have to leave now :(");
    assert!(bot.wait_for_exit().await, "bot should exit successfully");
}

#[tokio::test]
async fn test_server_eof_ends_the_session() {
    let mut bot = BotHarness::spawn().await;
    bot.drain_registration().await;

    bot.shutdown_write().await;
    // Best-effort QUIT on the way out, then a clean exit.
    assert_eq!(bot.expect_line().await, "QUIT :I have to leave now :(");
    assert!(bot.wait_for_exit().await, "bot should exit successfully");
}

#[tokio::test]
async fn test_send_gap_paces_multi_line_replies() {
    let mut bot = BotHarness::spawn_with("channels = [\"#chan\"]\nsend_gap_ms = 300").await;
    bot.drain_registration().await;

    bot.send_line(":alice!a@host PRIVMSG #chan :!sing").await;
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG #chan :Daisy, Daisy, Give me your answer, do."
    );
    let first = Instant::now();
    assert_eq!(
        bot.expect_line().await,
        "PRIVMSG #chan :I'm half crazy all for the love of you."
    );
    assert!(
        first.elapsed().as_millis() >= 200,
        "second line should be paced by the configured gap"
    );
}
