// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Runs the compiled service binary against the real process environment.

#![cfg(unix)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

const BIN: &str = env!("CARGO_BIN_EXE_env-info-service");

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn service(port: &str) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env("PORT", port)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn wait_exit(child: &mut Child) -> ExitStatus {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("service did not exit in time");
        }
        sleep(Duration::from_millis(50));
    }
}

fn get(port: u16, path: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut stream = loop {
        match TcpStream::connect(("127.0.0.1", port)) {
            Ok(stream) => break stream,
            Err(_) if Instant::now() < deadline => sleep(Duration::from_millis(50)),
            Err(e) => panic!("service never accepted connections: {e}"),
        }
    };
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

fn terminate(child: &Child) {
    let status = Command::new("kill")
        .arg("-TERM")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn serves_process_env_and_exits_cleanly_on_sigterm() {
    let port = free_port();
    let mut child = service(&port.to_string())
        .env("STAGE", "")
        .env("TENANT", "acme")
        .spawn()
        .unwrap();

    let root = get(port, "/");
    let health = get(port, "/health");
    terminate(&child);
    let status = wait_exit(&mut child);

    assert!(root.starts_with("HTTP/1.1 200 OK"), "got: {root}");
    assert!(root.ends_with(r#"{"stage":"","tenant":"acme"}"#), "got: {root}");
    assert!(health.ends_with(r#"{"status":"healthy"}"#), "got: {health}");
    assert!(status.success(), "exit status: {status}");
}

#[test]
fn reports_not_set_for_absent_process_vars() {
    let port = free_port();
    let mut child = service(&port.to_string())
        .env_remove("STAGE")
        .env_remove("TENANT")
        .spawn()
        .unwrap();

    let root = get(port, "/");
    terminate(&child);
    let status = wait_exit(&mut child);

    assert!(
        root.ends_with(r#"{"stage":"not set","tenant":"not set"}"#),
        "got: {root}"
    );
    assert!(status.success(), "exit status: {status}");
}

#[test]
fn port_zero_exits_nonzero() {
    let mut child = service("0").spawn().unwrap();
    let status = wait_exit(&mut child);
    assert!(!status.success(), "exit status: {status}");
}

#[test]
fn bound_port_exits_nonzero() {
    let taken = TcpListener::bind("0.0.0.0:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let mut child = service(&port.to_string()).spawn().unwrap();
    let status = wait_exit(&mut child);
    assert!(!status.success(), "exit status: {status}");
    drop(taken);
}
