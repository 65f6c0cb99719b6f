use ini_bind::{ini_document, ini_section, Loader};
use tracing_subscriber::EnvFilter;

ini_section! {
    #[derive(Debug, Default)]
    struct MysqlConfig {
        address: String => "address",
        port: u16 => "port",
        username: String => "username",
        password: String => "password",
    }
}

ini_section! {
    #[derive(Debug, Default)]
    struct RedisConfig {
        host: String => "host",
        port: u16 => "port",
        password: String => "password",
        database: i64 => "database",
        test: bool => "test",
    }
}

ini_document! {
    #[derive(Debug, Default)]
    struct Config {
        mysql: MysqlConfig => "mysql",
        redis: RedisConfig => "redis",
    }
}

fn main() -> Result<(), ini_bind::Error> {
    // RUST_LOG=ini_bind=debug shows skipped sections and keys
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: Config = Loader::builder()
        .with_file("demos/conf.ini", true)
        .with_file("demos/local.ini", false)
        .with_env("DEMO", "__")
        .load()?;

    let mysql = &config.mysql;
    println!(
        "mysql {} {} {} {}",
        mysql.address, mysql.port, mysql.username, mysql.password
    );
    let redis = &config.redis;
    println!(
        "redis {} {} {} {} {}",
        redis.host, redis.port, redis.password, redis.database, redis.test
    );

    Ok(())
}
