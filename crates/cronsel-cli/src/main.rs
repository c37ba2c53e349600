//! Drives one cron field session from a line-oriented script on stdin.
//!
//! ```text
//! cronsel [CONFIG.json | FIELD] < script.txt
//! ```
mod script;

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedReceiver,
    time::sleep,
};
use tracing::{info, warn};

use cronsel_core::{ChannelSink, DisplayOptions, FieldHandle, MetricsHandle, format_selection};
use cronsel_model::{FieldConfig, FieldType, Selection};
use cronsel_observe::{LoggerConfig, init_logger};
use cronsel_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

use crate::script::Command;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let log_cfg = LoggerConfig::from_env()?;
    init_logger(&log_cfg)?;

    // 2) field config
    let cfg = load_config(std::env::args().nth(1).as_deref())?;
    info!(field = %cfg.field, debounce_ms = cfg.debounce_ms, "config loaded");

    // 3) session
    let metrics = PrometheusMetrics::new()?;
    let handle: MetricsHandle = Arc::new(metrics.clone());
    let (sink, emitted) = ChannelSink::channel();
    let session = FieldHandle::spawn_with_metrics(&cfg, sink, handle)?;

    let mut state = Demo {
        display: DisplayOptions::from_config(&cfg),
        cfg,
        current: Selection::new(),
        metrics,
        emitted,
    };

    // 4) script
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match Command::parse_line(&line, state.cfg.field) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "skipping script line");
                continue;
            }
        };
        state.run(cmd, &session).await?;
    }

    // let the last window settle before shutting down
    let settle = state.cfg.debounce() * 2;
    state.wait(settle, &session).await?;
    session.shutdown().await?;
    state.show();
    Ok(())
}

struct Demo {
    cfg: FieldConfig,
    display: DisplayOptions,
    current: Selection,
    metrics: PrometheusMetrics,
    emitted: UnboundedReceiver<Selection>,
}

impl Demo {
    async fn run(&mut self, cmd: Command, session: &FieldHandle) -> anyhow::Result<()> {
        match cmd {
            Command::Click(v) => session.activate(v)?,
            Command::Unclick(v) => session.deactivate(v)?,
            Command::Clear => session.clear()?,
            Command::ReadOnly(flag) => session.set_read_only(flag)?,
            Command::Set(selection) => {
                let domain = self.cfg.domain();
                let selection = domain.fit(&selection);
                match domain.validate(&selection) {
                    Ok(()) => {
                        session.set_selection(selection.clone())?;
                        self.current = selection;
                        self.show();
                    }
                    Err(e) => warn!(error = %e, "selection not applied"),
                }
            }
            Command::Wait(d) => self.wait(d, session).await?,
            Command::Show => {
                self.drain(session)?;
                self.show();
            }
            Command::Options => {
                for opt in self.cfg.options() {
                    println!("{:>3}  {}", opt.value, opt.label);
                }
            }
            Command::Metrics => {
                let mut buffer = Vec::new();
                TextEncoder::new().encode(&self.metrics.gather(), &mut buffer)?;
                print!("{}", String::from_utf8_lossy(&buffer));
            }
        }
        Ok(())
    }

    /// Sleeps for `d` while feeding every emitted selection back into the session.
    async fn wait(&mut self, d: Duration, session: &FieldHandle) -> anyhow::Result<()> {
        let timer = sleep(d);
        tokio::pin!(timer);
        loop {
            let selection = tokio::select! {
                biased;
                Some(selection) = self.emitted.recv() => selection,
                _ = &mut timer => break,
            };
            self.accept(selection, session)?;
        }
        self.drain(session)
    }

    fn drain(&mut self, session: &FieldHandle) -> anyhow::Result<()> {
        while let Ok(selection) = self.emitted.try_recv() {
            self.accept(selection, session)?;
        }
        Ok(())
    }

    fn accept(&mut self, selection: Selection, session: &FieldHandle) -> anyhow::Result<()> {
        println!(
            "{} -> [{selection}] {}",
            self.cfg.field,
            format_selection(&selection, self.cfg.field, &self.display)
        );
        // the session never reads its own output; the owner hands it back
        if !session.is_closed() {
            session.set_selection(selection.clone())?;
        }
        self.current = selection;
        Ok(())
    }

    fn show(&self) {
        println!(
            "{} = [{}] {}",
            self.cfg.field,
            self.current,
            format_selection(&self.current, self.cfg.field, &self.display)
        );
    }
}

fn load_config(arg: Option<&str>) -> anyhow::Result<FieldConfig> {
    let Some(arg) = arg else {
        return Ok(FieldConfig::new(FieldType::Minutes));
    };

    if Path::new(arg).is_file() {
        let json = std::fs::read_to_string(arg).with_context(|| format!("reading {arg}"))?;
        return FieldConfig::from_json(&json).with_context(|| format!("parsing {arg}"));
    }

    let field: FieldType = arg
        .parse()
        .with_context(|| format!("'{arg}' is neither a config file nor a field name"))?;
    Ok(FieldConfig::new(field))
}
