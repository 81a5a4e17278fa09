//! # webserv - Entry Point
//! src/main.rs
//!
//! Uso: `webserv <config>`

use clap::Parser;
use webserv::config::{Cli, Config};
use webserv::server::Server;

fn main() {
    println!("=================================");
    println!("  webserv HTTP/1.1 Server");
    println!("  Archivos estáticos + CGI");
    println!("=================================\n");

    let cli = Cli::parse();

    // Los errores de configuración son fatales antes de escuchar
    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    config.print_summary();

    let server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("💥 No se pudo indexar staticfiles: {}", e);
            std::process::exit(1);
        }
    };
    if server.index().is_empty() {
        println!("⚠️  staticfiles no tiene archivos servibles: todo request estático será 404");
    }
    println!("📁 Archivos estáticos indexados: {}\n", server.index().len());

    // Iniciar el servidor (esto bloquea el proceso principal)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
