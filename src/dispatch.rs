//! Command dispatch.
//!
//! Classifies an inbound chat message as either a `!` command or a
//! conversational trigger and produces the outbound actions it calls for.
//! The dispatcher is a pure decision procedure: it performs no I/O and
//! signals session shutdown through [`Action::Quit`] rather than touching
//! session state itself.

use regex::Regex;
use std::collections::HashMap;

use crate::config::Config;
use crate::tables;

/// A chat message reduced to what dispatch needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    /// Nick of the sender.
    pub sender: String,
    /// Where the answer goes: the channel, or the sender for a private message.
    pub reply_target: String,
    /// The message text.
    pub text: String,
}

/// One outbound consequence of a dispatched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send `text` to `target` as a chat message.
    Say {
        /// Recipient channel or nick.
        target: String,
        /// Message text.
        text: String,
    },
    /// End the session after any preceding sends.
    Quit,
}

impl Action {
    fn say(target: &str, text: impl Into<String>) -> Self {
        Action::Say {
            target: target.to_string(),
            text: text.into(),
        }
    }
}

/// Maps parsed chat messages to outbound actions.
pub struct Dispatcher {
    nick: String,
    master: String,
    replies: HashMap<&'static str, String>,
    /// `<word> <nick>` anchored at end of text.
    word_then_nick: Regex,
    /// `<nick> <word>` anchored at end of text.
    nick_then_word: Regex,
}

impl Dispatcher {
    /// Build a dispatcher for the configured nick and master.
    pub fn new(config: &Config) -> Result<Self, regex::Error> {
        let nick = regex::escape(&config.nick);
        let word_then_nick = Regex::new(&format!(r"(?i)(\w+)\W*{}\W*$", nick))?;
        let nick_then_word = Regex::new(&format!(r"(?i){}\W*(\w+)\W*$", nick))?;

        let replies = tables::REPLIES
            .iter()
            .map(|(word, reply)| {
                let text = reply
                    .replace("{nick}", &config.nick)
                    .replace("{master}", &config.master);
                (*word, text)
            })
            .collect();

        Ok(Self {
            nick: config.nick.clone(),
            master: config.master.clone(),
            replies,
            word_then_nick,
            nick_then_word,
        })
    }

    /// Decide what to do about one inbound chat message.
    pub fn dispatch(&self, event: &ChatEvent) -> Vec<Action> {
        match event.text.strip_prefix('!') {
            Some(rest) => self.dispatch_command(event, rest),
            None => self.dispatch_trigger(event),
        }
    }

    fn dispatch_command(&self, event: &ChatEvent, rest: &str) -> Vec<Action> {
        let (keyword, arg) = match rest.split_once(char::is_whitespace) {
            Some((keyword, arg)) => (keyword, arg),
            None => (rest, ""),
        };
        let reply = event.reply_target.as_str();

        match keyword.to_ascii_lowercase().as_str() {
            "commands" => vec![
                Action::say(reply, "Commands:"),
                Action::say(reply, "!say: Say stuff, !lang ISO code does lookup"),
                Action::say(reply, "!cauth: give you centralauth page for a user"),
                Action::say(reply, "!guc: gives Global User Contribs page"),
                Action::say(reply, "!die: Makes me leave :("),
            ],
            "die" => {
                // Authorization gate: only the exact bot nick as argument
                // triggers the shutdown. Anything else is silently ignored.
                if !arg.trim().eq_ignore_ascii_case(&self.nick) {
                    return Vec::new();
                }
                vec![
                    Action::say(reply, "Do you wanna build a snowman?"),
                    Action::say(reply, "It doesn't have to be a snowman."),
                    Action::say(reply, "Ok, Bye :("),
                    Action::say(&self.master, "I have to leave now :("),
                    Action::Quit,
                ]
            }
            "say" => {
                if arg.is_empty() {
                    return Vec::new();
                }
                vec![
                    Action::say(reply, arg),
                    Action::say(&self.master, format!("Message sent: {}", arg)),
                ]
            }
            "guc" => self.link_pair(reply, arg, tables::guc_url),
            "cauth" => self.link_pair(reply, arg, tables::cauth_url),
            "link" => self.link_pair(reply, arg, tables::link_url),
            "sing" => vec![
                Action::say(reply, "Daisy, Daisy, Give me your answer, do."),
                Action::say(reply, "I'm half crazy all for the love of you."),
            ],
            "random" => vec![Action::say(reply, "7.")],
            "lang" => {
                let code = arg.trim().trim_end_matches('?').trim().to_lowercase();
                if code.is_empty() {
                    return Vec::new();
                }
                let text = match tables::language_name(&code) {
                    Some(name) => format!("{} is {}!", code, name),
                    None => format!("unknown language code: {}", code),
                };
                vec![Action::say(reply, text)]
            }
            _ => Vec::new(),
        }
    }

    /// Same URL to the reply target and the master. The argument is opaque
    /// chat text; no validation or escaping is done.
    fn link_pair(&self, reply: &str, arg: &str, build: fn(&str) -> String) -> Vec<Action> {
        if arg.is_empty() {
            return Vec::new();
        }
        let url = build(arg);
        vec![
            Action::say(reply, url.clone()),
            Action::say(&self.master, url),
        ]
    }

    fn dispatch_trigger(&self, event: &ChatEvent) -> Vec<Action> {
        let word = self
            .word_then_nick
            .captures(&event.text)
            .or_else(|| self.nick_then_word.captures(&event.text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase());

        if let Some(reply) = word.and_then(|w| self.replies.get(w.as_str())) {
            return vec![Action::say(&event.reply_target, reply.clone())];
        }
        Vec::new()
    }
}
