/// Fixed header shown once per logging session.
pub const BANNER: &str = "\
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║     ███████╗██████╗ ██╗███╗   ██╗ ██████╗ ██████╗  ██████╗ ████████╗████████╗
║     ██╔════╝██╔══██╗██║████╗  ██║██╔═══██╗██╔══██╗██╔═══██╗╚══██╔══╝╚══██╔══╝
║     ███████╗██████╔╝██║██╔██╗ ██║██║   ██║██████╔╝██║   ██║   ██║      ██║   
║     ╚════██║██╔═══╝ ██║██║╚██╗██║██║   ██║██╔══██╗██║   ██║   ██║      ██║   
║     ███████║██║     ██║██║ ╚████║╚██████╔╝██████╔╝╚██████╔╝   ██║      ██║   
║     ╚══════╝╚═╝     ╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═════╝  ╚═════╝    ╚═╝      ╚═╝   
║                                                                              ║
║                              Pre-Build Processing                            ║
╚══════════════════════════════════════════════════════════════════════════════╝";
