//! 库存目录前端页面

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Big E-commerce Store</title>
<style>
  body {
    font-family: Arial, sans-serif;
    background: #eef2f3;
    padding: 20px;
    max-width: 900px;
    margin: auto;
  }
  h1 { text-align: center; color: #333; }
  #product-form {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    justify-content: center;
    margin-bottom: 20px;
  }
  #product-form input {
    padding: 10px;
    font-size: 1rem;
    border-radius: 5px;
    border: 1px solid #ccc;
  }
  #product-form button {
    padding: 10px 20px;
    background: #007bff;
    border: none;
    color: white;
    border-radius: 5px;
    cursor: pointer;
  }
  #message { text-align: center; min-height: 1.2em; margin-bottom: 10px; }
  #loading { text-align: center; color: #555; }
  #products {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 15px;
  }
  .product {
    background: white;
    border-radius: 8px;
    box-shadow: 0 2px 6px rgba(0,0,0,0.1);
    padding: 10px;
    text-align: center;
  }
  .product img { max-width: 100%; max-height: 150px; object-fit: contain; }
  .product button {
    background: #dc3545;
    border: none;
    color: white;
    padding: 6px 12px;
    border-radius: 4px;
    cursor: pointer;
  }
  #summary { margin-top: 20px; text-align: center; font-weight: bold; }
</style>
</head>
<body>

<h1>Big E-commerce Store</h1>

<div id="message"></div>

<form id="product-form">
  <input type="text" name="name" placeholder="Product name" required />
  <input type="number" name="price" placeholder="Price" min="0.01" step="0.01" required />
  <input type="url" name="image" placeholder="Image URL" required />
  <button type="submit">Add Product</button>
</form>

<div id="loading" style="display:none;">Loading...</div>

<div id="products"></div>

<div id="summary"></div>

<script>
  const form = document.getElementById('product-form');
  const productsDiv = document.getElementById('products');
  const messageDiv = document.getElementById('message');
  const summaryDiv = document.getElementById('summary');
  const loadingDiv = document.getElementById('loading');

  function showLoading(show) {
    loadingDiv.style.display = show ? 'block' : 'none';
  }

  function showMessage(msg, isError = true) {
    messageDiv.textContent = msg;
    messageDiv.style.color = isError ? 'red' : 'green';
    if (msg) {
      setTimeout(() => { messageDiv.textContent = ''; }, 3000);
    }
  }

  async function fetchProducts() {
    try {
      showLoading(true);
      const res = await fetch('/api/products');
      if (!res.ok) throw new Error('Failed to fetch products');
      const products = await res.json();
      renderProducts(products);
      renderSummary(products);
    } catch (e) {
      showMessage(e.message);
    } finally {
      showLoading(false);
    }
  }

  function renderProducts(products) {
    productsDiv.replaceChildren();
    if (products.length === 0) {
      const empty = document.createElement('p');
      empty.textContent = 'No products yet. Add some!';
      productsDiv.appendChild(empty);
      return;
    }
    products.forEach(p => {
      const el = document.createElement('div');
      el.className = 'product';

      const img = document.createElement('img');
      img.src = p.image;
      img.alt = p.name;

      const title = document.createElement('h3');
      title.textContent = p.name;

      const price = document.createElement('p');
      price.textContent = '$' + p.price.toFixed(2);

      const del = document.createElement('button');
      del.textContent = 'Delete';
      del.onclick = () => deleteProduct(p.id);

      el.append(img, title, price, del);
      productsDiv.appendChild(el);
    });
  }

  function renderSummary(products) {
    const total = products.reduce((acc, p) => acc + p.price, 0);
    summaryDiv.textContent = 'Total Products: ' + products.length + ' | Total Price: $' + total.toFixed(2);
  }

  async function deleteProduct(id) {
    if (!confirm('Are you sure you want to delete this product?')) return;
    try {
      showLoading(true);
      const res = await fetch('/api/products/' + encodeURIComponent(id), { method: 'DELETE' });
      if (!res.ok) throw new Error('Failed to delete product');
      showMessage('Product deleted', false);
      fetchProducts();
    } catch (e) {
      showMessage(e.message);
    } finally {
      showLoading(false);
    }
  }

  form.addEventListener('submit', async e => {
    e.preventDefault();
    const name = form.elements.name.value.trim();
    const price = parseFloat(form.elements.price.value);
    const image = form.elements.image.value.trim();
    if (!name || !(price > 0) || !image) {
      showMessage('Please fill all fields with valid values');
      return;
    }

    try {
      showLoading(true);
      const res = await fetch('/api/products', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ name, price, image })
      });
      if (!res.ok) throw new Error('Failed to add product');
      form.reset();
      showMessage('Product added successfully!', false);
      fetchProducts();
    } catch (e) {
      showMessage(e.message);
    } finally {
      showLoading(false);
    }
  });

  fetchProducts();
</script>

</body>
</html>
"##;
