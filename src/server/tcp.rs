//! # Servidor TCP con un Proceso por Conexión
//! src/server/tcp.rs
//!
//! El proceso principal solo acepta conexiones: por cada una hace `fork`,
//! cierra su copia del socket y vuelve a `accept`. El hijo lee un request,
//! lo atiende, responde y termina. Los hijos no comparten memoria mutable:
//! la configuración y el índice estático son copias del padre.

use crate::cgi::{run_cgi_program, CgiEnvironment, ConnectionInfo};
use crate::config::Config;
use crate::http::encoder::send_response;
use crate::http::{Request, Response};
use crate::router::{Route, Router};
use crate::static_files::{self, StaticIndex};
use std::io::{self, Read};
use std::net::{TcpListener, TcpStream};
use std::os::unix::io::AsRawFd;
use std::time::Instant;

/// Tamaño máximo del request que se lee (una sola lectura)
pub const REQUEST_BUFFER_SIZE: usize = 8192;

/// Servidor HTTP/1.1 de archivos estáticos y CGI
pub struct Server {
    config: Config,
    index: StaticIndex,
    router: Router,
}

impl Server {
    /// Crea el servidor e indexa `staticfiles`
    pub fn new(config: Config) -> io::Result<Self> {
        let index = StaticIndex::scan(&config.staticfiles)?;
        Ok(Self::with_index(config, index))
    }

    /// Crea el servidor con un índice ya construido
    pub fn with_index(config: Config, index: StaticIndex) -> Self {
        let router = Router::new(&config.cgibin);
        Self { config, index, router }
    }

    pub fn index(&self) -> &StaticIndex {
        &self.index
    }

    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un proceso por conexion\n");

        // Los handlers se recogen solos al terminar, sin zombies
        set_child_exit_disposition(libc::SIG_IGN);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => self.fork_handler(&listener, stream),
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    fn fork_handler(&self, listener: &TcpListener, stream: TcpStream) {
        let peer_addr = stream.peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // SAFETY: el proceso principal tiene un solo thread y el hijo sale con
        // process::exit sin volver al loop de accept.
        match unsafe { libc::fork() } {
            -1 => {
                eprintln!("   ❌ fork falló para {}: {}", peer_addr, io::Error::last_os_error());
            }
            0 => {
                // SAFETY: el hijo no vuelve a usar el listener
                unsafe { libc::close(listener.as_raw_fd()) };

                // El handler sí espera a su hijo CGI con waitpid
                set_child_exit_disposition(libc::SIG_DFL);

                let code = match self.handle_connection(stream) {
                    Ok(()) => 0,
                    Err(e) => {
                        eprintln!("   ❌ Error en handler {}: {}", std::process::id(), e);
                        1
                    }
                };
                std::process::exit(code);
            }
            pid => {
                println!(" ✅ Nueva conexión desde: {} (handler pid {})", peer_addr, pid);
                drop(stream);
            }
        }
    }

    /// Atiende una conexión: una lectura, una respuesta, cierre
    ///
    /// Si el cliente cierra sin mandar nada no se responde.
    pub fn handle_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        let start = Instant::now();

        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            println!("   ✅ Conexión cerrada");
            return Ok(());
        }

        let request = Request::from_bytes(&buffer[..bytes_read]);
        let peer = stream.peer_addr()?;
        let connection = ConnectionInfo {
            remote_addr: peer.ip().to_string(),
            remote_port: peer.port(),
            server_addr: self.config.host.clone(),
            server_port: self.config.port,
        };

        let response = self.dispatch(&request, &connection);
        let status = response.status().to_string();

        send_response(&mut stream, response, request.accepts_gzip())?;

        println!("   ✅ {} ({:.2}ms)\n", status, start.elapsed().as_secs_f64() * 1000.0);

        Ok(())
    }

    /// Clasifica el request y arma la respuesta
    pub fn dispatch(&self, request: &Request, connection: &ConnectionInfo) -> Response {
        match self.router.classify(request) {
            Route::Static(name) => {
                println!("   ✅ {} {} [static]", request.method(), request.target());
                static_files::resolve(&name, &self.index, &self.config)
            }
            Route::Cgi(target) => {
                println!("   ✅ {} {} [cgi]", request.method(), target);
                let (program, env) = CgiEnvironment::build(request, connection);
                run_cgi_program(&program, &env, &self.config)
            }
        }
    }
}

/// Cambia la disposición de `SIGCHLD`
///
/// Con `SIG_IGN` el kernel recoge a los hijos apenas terminan; con `SIG_DFL`
/// quedan esperando un `waitpid`, que es lo que necesita `Child::wait`.
fn set_child_exit_disposition(disposition: libc::sighandler_t) {
    // SAFETY: SIG_IGN y SIG_DFL no instalan código de usuario como handler
    unsafe { libc::signal(libc::SIGCHLD, disposition) };
}
