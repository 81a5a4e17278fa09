//! # Ejecución de Programas CGI
//! src/cgi/executor.rs
//!
//! Lanza `exec <cgibin>/<programa>` como proceso hijo con el entorno del
//! request, conecta su stdout a un pipe y espera a que termine. El handler
//! queda bloqueado mientras el hijo corre; no hay timeout.

use super::env::CgiEnvironment;
use super::parser::process_child_output;
use crate::config::Config;
use crate::http::Response;
use std::process::{Command, Stdio};

/// Ruta del script dentro del directorio CGI
pub fn script_path(program_name: &str, config: &Config) -> String {
    format!("{}/{}", config.cgibin, program_name)
}

/// Ejecuta el programa CGI y convierte su salida en respuesta
///
/// Si el intérprete no se puede lanzar, o el programa termina con status
/// distinto de cero, la respuesta es un 500 sin headers ni body.
pub fn run_cgi_program(program_name: &str, env: &CgiEnvironment, config: &Config) -> Response {
    let script = script_path(program_name, config);

    let child = Command::new(&config.exec)
        .arg(&script)
        .envs(env.iter())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            eprintln!("   ❌ No se pudo ejecutar {} {}: {}", config.exec, script, e);
            return Response::internal_error();
        }
    };

    // El pipe se lee mientras se espera al hijo, no después: un hijo que
    // llena el buffer del pipe no puede bloquearse. Con exit != 0 lo leído
    // se descarta sin parsear.
    match child.wait_with_output() {
        Ok(output) => {
            if !output.status.success() {
                eprintln!("   ❌ CGI {} terminó con {}", script, output.status);
            }
            process_child_output(output.status, &output.stdout)
        }
        Err(e) => {
            eprintln!("   ❌ Error esperando a {}: {}", script, e);
            Response::internal_error()
        }
    }
}
